use crate::error::LoginError;

pub trait Redirect {
    fn redirect(&self, page: &str) -> Result<(), LoginError>;
}

/// Full page load through `window.location`; the role pages live outside this app.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserRedirect;

impl Redirect for BrowserRedirect {
    fn redirect(&self, page: &str) -> Result<(), LoginError> {
        gloo_utils::window()
            .location()
            .set_href(page)
            .map_err(|e| LoginError::Navigation(format!("{:?}", e)))
    }
}
