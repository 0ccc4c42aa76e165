//! Host call routing.
//!
//! `Bridge` bundles the runtime, the view controller, and the recent-files
//! renderer behind one entry point so a host call (native or JSON wire form)
//! reaches the component that owns it.

use std::rc::Rc;

use crate::config::EditorConfig;
use crate::error::Result;
use crate::platform::{EditorFactory, HostChannel, RecentFilesView, ViewSurfaces};
use crate::protocol::HostCall;
use crate::recent::RecentFilesRenderer;
use crate::runtime::BridgeRuntime;
use crate::view::ViewStateController;

pub struct Bridge<F: EditorFactory, H, S, L> {
    runtime: BridgeRuntime<F, H>,
    view: ViewStateController<S>,
    recent: RecentFilesRenderer<L, H>,
}

impl<F, H, S, L> Bridge<F, H, S, L>
where
    F: EditorFactory,
    H: HostChannel + 'static,
    S: ViewSurfaces,
    L: RecentFilesView,
{
    pub fn new(factory: F, host: H, surfaces: S, list: L) -> Self {
        let host = Rc::new(host);
        Self {
            runtime: BridgeRuntime::new(factory, Rc::clone(&host)),
            view: ViewStateController::new(surfaces),
            recent: RecentFilesRenderer::new(list, host),
        }
    }

    /// Present the start page and bring the editor up.
    pub fn start(&mut self, config: &EditorConfig) -> Result<()> {
        self.view.present_initial();
        self.runtime.initialize(config)?;
        Ok(())
    }

    pub fn handle(&mut self, call: HostCall) {
        tracing::debug!(call = call.name(), "host call");
        match call {
            HostCall::ShowEditor => self.view.show_editor(),
            HostCall::ShowStartPage => self.view.show_start_page(),
            HostCall::UpdateRecentFiles(files) => self.recent.update(files),
            HostCall::TogglePreview(show) => self.runtime.set_preview_visible(show),
            HostCall::SetContent(markdown) => self.runtime.set_content(&markdown),
        }
    }

    /// Decode and apply a host call in JSON wire form.
    pub fn dispatch_json(&mut self, raw: &str) -> Result<()> {
        let call = HostCall::from_json(raw)?;
        self.handle(call);
        Ok(())
    }

    pub fn runtime(&self) -> &BridgeRuntime<F, H> {
        &self.runtime
    }

    pub fn view(&self) -> &ViewStateController<S> {
        &self.view
    }

    pub fn recent(&self) -> &RecentFilesRenderer<L, H> {
        &self.recent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BridgeError;
    use crate::platform::Surface;
    use crate::protocol::FileDescriptor;
    use crate::testing::{FakeEditorFactory, FakeRecentList, FakeSurfaces, RecordingHost};
    use crate::view::ViewState;

    type TestBridge = Bridge<FakeEditorFactory, RecordingHost, FakeSurfaces, FakeRecentList>;

    fn started() -> TestBridge {
        let mut bridge = Bridge::new(
            FakeEditorFactory::new(),
            RecordingHost::new(),
            FakeSurfaces::default(),
            FakeRecentList::default(),
        );
        bridge.start(&EditorConfig::default()).unwrap();
        bridge
    }

    fn host(bridge: &TestBridge) -> &RecordingHost {
        bridge.runtime().host()
    }

    #[test]
    fn start_presents_start_page_and_handshakes() {
        let bridge = started();

        assert_eq!(bridge.view().state(), ViewState::Start);
        assert!(bridge.view().surfaces().is_visible(Surface::Start));
        assert!(!bridge.view().surfaces().is_visible(Surface::Editor));
        assert_eq!(host(&bridge).names(), vec!["editorInitialized".to_string()]);
    }

    #[test]
    fn start_surfaces_editor_creation_failure() {
        let mut bridge: TestBridge = Bridge::new(
            FakeEditorFactory::failing(),
            RecordingHost::new(),
            FakeSurfaces::default(),
            FakeRecentList::default(),
        );

        let err = bridge.start(&EditorConfig::default()).unwrap_err();
        assert!(matches!(err, BridgeError::EditorCreate(_)));
        assert!(host(&bridge).sent().is_empty());
    }

    #[test]
    fn view_calls_route_to_the_controller() {
        let mut bridge = started();

        bridge.handle(HostCall::ShowEditor);
        assert_eq!(bridge.view().state(), ViewState::Editor);

        bridge.handle(HostCall::ShowStartPage);
        assert_eq!(bridge.view().state(), ViewState::Start);
    }

    #[test]
    fn recent_files_route_to_the_renderer() {
        let mut bridge = started();
        bridge.handle(HostCall::UpdateRecentFiles(vec![FileDescriptor::new(
            "a.md", "/a.md",
        )]));

        assert_eq!(bridge.recent().view().labels(), vec!["a.md"]);
        bridge.recent().view().click(0);
        assert_eq!(host(&bridge).count("openFile"), 1);
    }

    #[test]
    fn toggle_preview_routes_to_the_runtime() {
        let mut bridge = started();
        bridge.handle(HostCall::TogglePreview(true));
        bridge.handle(HostCall::TogglePreview(false));

        assert!(!bridge.runtime().preview_visible());
    }

    #[test]
    fn set_content_reports_one_change() {
        let mut bridge = started();
        bridge.handle(HostCall::SetContent("hello".to_string()));

        assert_eq!(bridge.runtime().content().as_deref(), Some("hello"));
        assert_eq!(
            host(&bridge).names(),
            vec!["editorInitialized".to_string(), "contentChanged".to_string()]
        );
    }

    #[test]
    fn wire_form_dispatch() {
        let mut bridge = started();

        bridge
            .dispatch_json(r#"{"call":"showEditor"}"#)
            .unwrap();
        assert_eq!(bridge.view().state(), ViewState::Editor);

        let err = bridge.dispatch_json(r#"{"call":"showNothing"}"#).unwrap_err();
        assert!(matches!(err, BridgeError::InvalidHostCall(_)));
        assert_eq!(bridge.view().state(), ViewState::Editor);
    }
}
