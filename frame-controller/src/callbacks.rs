//! Lifecycle callbacks reported to the caller

/// Close / minimize / maximize intents.
///
/// The controller has no opinion on what these do; it only reports that
/// the user asked for them.
#[derive(Default)]
pub struct FrameCallbacks {
    on_close: Option<Box<dyn FnMut()>>,
    on_minimize: Option<Box<dyn FnMut()>>,
    on_maximize: Option<Box<dyn FnMut()>>,
}

impl FrameCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_close(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_close = Some(Box::new(f));
        self
    }

    pub fn on_minimize(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_minimize = Some(Box::new(f));
        self
    }

    /// Fired when maximize begins, not on restore
    pub fn on_maximize(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_maximize = Some(Box::new(f));
        self
    }

    pub(crate) fn close(&mut self) {
        if let Some(f) = self.on_close.as_mut() {
            f();
        }
    }

    pub(crate) fn minimize(&mut self) {
        if let Some(f) = self.on_minimize.as_mut() {
            f();
        }
    }

    pub(crate) fn maximize(&mut self) {
        if let Some(f) = self.on_maximize.as_mut() {
            f();
        }
    }
}

impl std::fmt::Debug for FrameCallbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameCallbacks")
            .field("on_close", &self.on_close.is_some())
            .field("on_minimize", &self.on_minimize.is_some())
            .field("on_maximize", &self.on_maximize.is_some())
            .finish()
    }
}
