//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use tower_sessions::Session;
use tracing::instrument;

use crate::filters;
use crate::models::session::load_user;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub username: String,
}

/// Display the home page.
///
/// First-time visitors get the name form; returning visitors get a button
/// straight to the menu.
#[instrument(skip(session))]
pub async fn home(session: Session) -> HomeTemplate {
    let username = load_user(&session).await.username;
    HomeTemplate { username }
}
