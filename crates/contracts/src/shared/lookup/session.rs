/// Generation of a session attached to an [`OverlaySurface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SessionToken(u64);

impl SessionToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// The single shared overlay region.
///
/// Holds at most one picker session. Attaching a new session hands the previous one
/// back to the caller, so replacement is always an explicit invalidation.
#[derive(Debug)]
pub struct OverlaySurface<S> {
    session: Option<(SessionToken, S)>,
    next_generation: u64,
    visible: bool,
    content_href: Option<String>,
}

impl<S> Default for OverlaySurface<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> OverlaySurface<S> {
    pub fn new() -> Self {
        Self {
            session: None,
            next_generation: 1,
            visible: false,
            content_href: None,
        }
    }

    /// Attach `session`, returning its token and the session it displaced.
    pub fn attach(&mut self, session: S) -> (SessionToken, Option<S>) {
        let token = SessionToken(self.next_generation);
        self.next_generation += 1;
        let displaced = self.session.replace((token, session)).map(|(_, s)| s);
        (token, displaced)
    }

    pub fn current(&self) -> Option<(SessionToken, &S)> {
        self.session.as_ref().map(|(t, s)| (*t, s))
    }

    pub fn current_token(&self) -> Option<SessionToken> {
        self.session.as_ref().map(|(t, _)| *t)
    }

    pub fn is_current(&self, token: SessionToken) -> bool {
        self.current_token() == Some(token)
    }

    /// Consume the session, only while `token` is still the attached one.
    pub fn take(&mut self, token: SessionToken) -> Option<S> {
        if self.is_current(token) {
            self.session.take().map(|(_, s)| s)
        } else {
            None
        }
    }

    pub fn detach(&mut self) -> Option<S> {
        self.session.take().map(|(_, s)| s)
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_content(&mut self, href: impl Into<String>) {
        self.content_href = Some(href.into());
    }

    /// Forget the loaded href; responses for it are no longer expected.
    pub fn clear_content(&mut self) {
        self.content_href = None;
    }

    /// Href of the content currently loaded into the surface.
    pub fn content_href(&self) -> Option<&str> {
        self.content_href.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attach_replaces_and_returns_previous() {
        let mut surface = OverlaySurface::new();
        let (first, displaced) = surface.attach("first");
        assert!(displaced.is_none());
        let (second, displaced) = surface.attach("second");
        assert_eq!(displaced, Some("first"));
        assert!(second > first);
        assert!(!surface.is_current(first));
        assert_eq!(surface.current(), Some((second, &"second")));
    }

    #[test]
    fn test_take_only_once_and_only_when_current() {
        let mut surface = OverlaySurface::new();
        let (stale, _) = surface.attach(1);
        let (token, _) = surface.attach(2);
        assert_eq!(surface.take(stale), None);
        assert_eq!(surface.take(token), Some(2));
        assert_eq!(surface.take(token), None);
        assert!(surface.current().is_none());
    }

    #[test]
    fn test_visibility_and_content() {
        let mut surface: OverlaySurface<()> = OverlaySurface::default();
        assert!(!surface.is_visible());
        surface.show();
        surface.set_content("/admin/core/author/?pop");
        assert!(surface.is_visible());
        assert_eq!(surface.content_href(), Some("/admin/core/author/?pop"));
        surface.hide();
        assert!(!surface.is_visible());
        assert_eq!(surface.detach(), None);
        surface.clear_content();
        assert_eq!(surface.content_href(), None);
    }
}
