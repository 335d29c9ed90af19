//! macOS entry point: builds the cursor manager and the menu bar shell, then
//! runs the AppKit main loop.

use std::cell::RefCell;
use std::rc::Rc;

use mouse_fun::model::{DEFAULT_ICON, DISPATCH_TICK};
use mouse_fun::platform::macos::app::{assets_root, set_accessory_policy};
use mouse_fun::platform::macos::bridge::{autoreleasepool, msg_send, NSApp};
use mouse_fun::platform::macos::input::{install_termination_observer, install_workspace_observers};
use mouse_fun::platform::macos::ui::create_menu_target;
use mouse_fun::platform::macos::{
    AppShell, CoreTextGlyphRenderer, MacOverlayFactory, MacPointer, RunLoopScheduler, StatusBar,
    UserDefaultsPreferences,
};
use mouse_fun::preferences::Preferences;
use mouse_fun::raster::{DirAssetStore, Rasterizer};
use mouse_fun::scheduler::{RepeatingTask, Scheduler};
use mouse_fun::{CursorManager, ManagerParts};

pub fn run() {
    // Event bus is already initialized by main()

    autoreleasepool(|| unsafe {
        let app = NSApp();
        set_accessory_policy();

        let root = assets_root();
        log::info!("[APP] Assets from {}", root.display());

        let scheduler: Rc<dyn Scheduler> = Rc::new(RunLoopScheduler::new());
        let pointer = Rc::new(MacPointer::new());
        let manager = Rc::new(RefCell::new(CursorManager::new(ManagerParts {
            rasterizer: Rasterizer::new(
                Box::new(DirAssetStore::new(&root)),
                Box::new(CoreTextGlyphRenderer),
            ),
            overlays: Box::new(MacOverlayFactory),
            pointer: pointer.clone(),
            native: pointer,
            scheduler: scheduler.clone(),
        })));

        let prefs = UserDefaultsPreferences;
        let size = prefs.cursor_size();

        let Some(target) = create_menu_target() else {
            log::error!("[APP] Cannot create menu target");
            return;
        };
        let shell = Rc::new(AppShell {
            manager: manager.clone(),
            prefs: RefCell::new(prefs),
            status_bar: StatusBar::install(target, DirAssetStore::new(&root), size),
        });

        install_termination_observer(manager.clone());
        install_workspace_observers();

        // Drain the event bus on the main loop
        let mut dispatch = RepeatingTask::new("dispatch", DISPATCH_TICK, scheduler);
        let tick_shell = shell.clone();
        dispatch.ensure_running(move || tick_shell.dispatch_pending());

        if let Err(e) = manager.borrow_mut().select_vector_icon(DEFAULT_ICON, size.size()) {
            log::warn!("[APP] Startup cursor unavailable: {}", e);
        }

        log::info!("[APP] Running");
        let _: () = msg_send![app, run];

        drop(dispatch);
        manager.borrow_mut().shutdown();
    });
}
