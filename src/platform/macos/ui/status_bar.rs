//! Status bar (menu bar) item with the cursor menu.
//!
//! ```text
//! Mouse-Fun
//! ─────────
//! Default, Heart, Star, ... Banana
//! ─────────
//! Custom Emoji...
//! ─────────
//! Settings ▸ Cursor Size ▸ Small / Medium / Large
//! ─────────
//! Reset to Default        ⌘R
//! ─────────
//! Quit Mouse-Fun          ⌘Q
//! ```

use objc2::runtime::Sel;

use crate::model::{CursorSize, CursorStyle};
use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, nil, ns_id, nsstring, sel, NSSize, NO, YES};
use crate::raster::DirAssetStore;

const APP_TITLE: &str = "Mouse-Fun";
const STATUS_ICON: &str = "menubar-template";
const FALLBACK_SYMBOL: &str = "cursorarrow.click.2";

/// NSVariableStatusItemLength
const VARIABLE_LENGTH: f64 = -1.0;
/// NSControlStateValueOn / Off
const STATE_ON: isize = 1;
const STATE_OFF: isize = 0;

pub struct StatusBar {
    item: id,
    target: id,
    assets: DirAssetStore,
}

impl StatusBar {
    /// Create the status item and its menu.
    ///
    /// # Safety
    /// Main thread only, after NSApplication is set up. `target` must
    /// implement the menu actions (see `menu_target`).
    pub unsafe fn install(target: id, assets: DirAssetStore, size: CursorSize) -> Self {
        let status_bar: id = msg_send![get_class("NSStatusBar"), systemStatusBar];
        let item: id = msg_send![status_bar, statusItemWithLength: VARIABLE_LENGTH];
        let _: id = msg_send![item, retain];

        let bar = Self {
            item,
            target,
            assets,
        };
        bar.install_button_icon();
        bar.refresh(size);
        bar
    }

    /// Rebuild the menu, checking the current size.
    ///
    /// # Safety
    /// Main thread only.
    pub unsafe fn refresh(&self, size: CursorSize) {
        let menu = self.build_menu(size);
        let _: () = msg_send![self.item, setMenu: menu];
        let _: () = msg_send![menu, release];
    }

    unsafe fn install_button_icon(&self) {
        let button: id = msg_send![self.item, button];
        if button == nil {
            return;
        }
        let mut icon = self.load_icon(STATUS_ICON, 18.0);
        if icon != nil {
            let _: () = msg_send![icon, setTemplate: YES];
        } else {
            let symbol = nsstring(FALLBACK_SYMBOL);
            let label = nsstring(APP_TITLE);
            icon = msg_send![
                get_class("NSImage"),
                imageWithSystemSymbolName: ns_id(&symbol),
                accessibilityDescription: ns_id(&label)
            ];
        }
        if icon != nil {
            let _: () = msg_send![button, setImage: icon];
        } else {
            let title = nsstring("MF");
            let _: () = msg_send![button, setTitle: ns_id(&title)];
        }
        let tip = nsstring(APP_TITLE);
        let _: () = msg_send![button, setToolTip: ns_id(&tip)];
    }

    /// Load `<name>.svg` from the asset directory as an autoreleased NSImage.
    unsafe fn load_icon(&self, name: &str, edge: f64) -> id {
        for path in self.assets.candidates(name) {
            if !path.is_file() {
                continue;
            }
            let path = nsstring(&path.to_string_lossy());
            let image: id = msg_send![get_class("NSImage"), alloc];
            let image: id = msg_send![image, initWithContentsOfFile: ns_id(&path)];
            if image != nil {
                let _: () = msg_send![image, setSize: NSSize::new(edge, edge)];
                let image: id = msg_send![image, autorelease];
                return image;
            }
        }
        nil
    }

    unsafe fn build_menu(&self, size: CursorSize) -> id {
        let menu: id = msg_send![get_class("NSMenu"), alloc];
        let menu: id = msg_send![menu, init];
        let _: () = msg_send![menu, setAutoenablesItems: NO];

        let title = self.add_item(menu, APP_TITLE, None, "");
        let _: () = msg_send![title, setEnabled: NO];
        add_separator(menu);

        for style in CursorStyle::ALL {
            if style == CursorStyle::CustomEmoji {
                add_separator(menu);
            }
            let item = self.add_item(
                menu,
                style.display_name(),
                Some(sel!(cursorStyleSelected:)),
                "",
            );
            let _: () = msg_send![item, setTag: style.tag()];
            if let Some(asset) = style.asset_name() {
                let icon = self.load_icon(asset, 16.0);
                if icon != nil {
                    let _: () = msg_send![item, setImage: icon];
                }
            }
        }
        add_separator(menu);

        let size_menu: id = msg_send![get_class("NSMenu"), alloc];
        let size_menu: id = msg_send![size_menu, init];
        for (i, option) in CursorSize::ALL.iter().enumerate() {
            let item = self.add_item(
                size_menu,
                option.display_name(),
                Some(sel!(cursorSizeSelected:)),
                "",
            );
            let _: () = msg_send![item, setTag: i as isize];
            let state = if *option == size { STATE_ON } else { STATE_OFF };
            let _: () = msg_send![item, setState: state];
        }
        let settings_menu: id = msg_send![get_class("NSMenu"), alloc];
        let settings_menu: id = msg_send![settings_menu, init];
        let size_item = self.add_item(settings_menu, "Cursor Size", None, "");
        let _: () = msg_send![size_item, setSubmenu: size_menu];
        let _: () = msg_send![size_menu, release];

        let settings_item = self.add_item(menu, "Settings", None, "");
        let _: () = msg_send![settings_item, setSubmenu: settings_menu];
        let _: () = msg_send![settings_menu, release];
        add_separator(menu);

        self.add_item(menu, "Reset to Default", Some(sel!(resetCursor:)), "r");
        add_separator(menu);
        self.add_item(menu, "Quit Mouse-Fun", Some(sel!(quitApp:)), "q");

        menu
    }

    /// Append an item targeting the menu target. Returns the item (owned by the menu).
    unsafe fn add_item(&self, menu: id, title: &str, action: Option<Sel>, key: &str) -> id {
        let title = nsstring(title);
        let key = nsstring(key);
        let item: id = msg_send![get_class("NSMenuItem"), alloc];
        let item: id = msg_send![
            item,
            initWithTitle: ns_id(&title),
            action: action,
            keyEquivalent: ns_id(&key)
        ];
        if action.is_some() {
            let _: () = msg_send![item, setTarget: self.target];
        }
        let _: () = msg_send![menu, addItem: item];
        let _: () = msg_send![item, release];
        item
    }
}

unsafe fn add_separator(menu: id) {
    let separator: id = msg_send![get_class("NSMenuItem"), separatorItem];
    let _: () = msg_send![menu, addItem: separator];
}

impl Drop for StatusBar {
    fn drop(&mut self) {
        unsafe {
            let status_bar: id = msg_send![get_class("NSStatusBar"), systemStatusBar];
            let _: () = msg_send![status_bar, removeStatusItem: self.item];
            let _: () = msg_send![self.item, release];
        }
    }
}
