use super::{PresentationTarget, WindowSettings};
use tauri::{window::Color, LogicalSize, Runtime, Size, WebviewWindow};

// Transparency itself is fixed when the window is built; see `shell::build_main_window`.
impl<R: Runtime> PresentationTarget for WebviewWindow<R> {
    #[cfg(desktop)]
    fn apply(&self, settings: &WindowSettings) -> Result<(), Box<dyn std::error::Error>> {
        let background = settings.transparent.then_some(Color(0, 0, 0, 0));
        self.set_background_color(background)?;
        self.set_focusable(settings.focusable)?;
        self.set_ignore_cursor_events(!settings.accepts_pointer_input)?;
        self.set_skip_taskbar(settings.transparent)?;
        // Always written so a later interactive activation undoes a collapse
        let (width, height) = settings.logical_size();
        self.set_size(Size::Logical(LogicalSize::new(width, height)))?;
        Ok(())
    }

    #[cfg(mobile)]
    fn apply(&self, settings: &WindowSettings) -> Result<(), Box<dyn std::error::Error>> {
        // Mobile window flags belong to the host activity
        log::debug!("Presentation on mobile is owned by the activity: {settings:?}");
        Ok(())
    }
}
