//! Overlay NSWindow.
//!
//! Borderless, transparent, click-through, at the cursor window level, on
//! every space (full-screen apps included), hidden from window cycling.

use std::sync::Arc;

use core_graphics::base::{kCGImageAlphaLast, kCGRenderingIntentDefault};
use core_graphics::color_space::CGColorSpace;
use core_graphics::data_provider::CGDataProvider;
use core_graphics::image::CGImage;
use foreign_types::ForeignType;

use super::view::{create_cursor_view, set_view_image};
use crate::error::{CursorError, Result};
use crate::model::{Point, Size, MIN_OVERLAY_EDGE};
use crate::overlay::{OverlayBackend, OverlayFactory};
use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, nil, NSPoint, NSRect, NSSize, NO, YES};
use crate::platform::macos::ffi::{cursor_window_level, frame_origin_to_cocoa, primary_screen_height, RawCGImage};
use crate::raster::RasterImage;

// NSWindowCollectionBehavior
const CAN_JOIN_ALL_SPACES: u64 = 1 << 0;
const STATIONARY: u64 = 1 << 4;
const IGNORES_CYCLE: u64 = 1 << 6;
const FULL_SCREEN_AUXILIARY: u64 = 1 << 8;

/// NSWindowStyleMaskBorderless
const STYLE_BORDERLESS: u64 = 0;
/// NSBackingStoreBuffered
const BACKING_BUFFERED: u64 = 2;

fn window_failed(call: &'static str) -> CursorError {
    CursorError::PlatformCallFailed { call, code: 0 }
}

pub struct MacOverlayWindow {
    window: id,
    view: id,
    size: Size,
}

impl MacOverlayWindow {
    /// # Safety
    /// Main thread only.
    pub unsafe fn create() -> Result<Self> {
        let edge = MIN_OVERLAY_EDGE as f64;
        let rect = NSRect::new(NSPoint::new(0.0, 0.0), NSSize::new(edge, edge));

        let window: id = msg_send![get_class("NSWindow"), alloc];
        let window: id = msg_send![
            window,
            initWithContentRect: rect,
            styleMask: STYLE_BORDERLESS,
            backing: BACKING_BUFFERED,
            defer: NO
        ];
        if window == nil {
            return Err(window_failed("NSWindow.initWithContentRect"));
        }
        let _: () = msg_send![window, setReleasedWhenClosed: NO];
        let _: () = msg_send![window, setOpaque: NO];
        let clear: id = msg_send![get_class("NSColor"), clearColor];
        let _: () = msg_send![window, setBackgroundColor: clear];
        let _: () = msg_send![window, setHasShadow: NO];
        let _: () = msg_send![window, setIgnoresMouseEvents: YES];
        let _: () = msg_send![window, setLevel: cursor_window_level()];
        let _: () = msg_send![
            window,
            setCollectionBehavior: CAN_JOIN_ALL_SPACES | STATIONARY | IGNORES_CYCLE | FULL_SCREEN_AUXILIARY
        ];

        let Some(view) = create_cursor_view(NSSize::new(edge, edge)) else {
            let _: () = msg_send![window, release];
            return Err(window_failed("MouseFunCursorView.initWithFrame"));
        };
        let _: () = msg_send![window, setContentView: view];
        // the window keeps the view alive
        let _: () = msg_send![view, release];

        log::debug!("[OVERLAY] Window created");
        Ok(Self {
            window,
            view,
            size: Size::square(MIN_OVERLAY_EDGE),
        })
    }
}

/// Wrap an RGBA raster in an autoreleased NSImage of the same point size.
unsafe fn ns_image(image: &RasterImage) -> Result<id> {
    let size = image.size();
    let (w, h) = (size.width as usize, size.height as usize);
    let provider = CGDataProvider::from_buffer(Arc::new(image.as_bytes().to_vec()));
    let cg = CGImage::new(
        w,
        h,
        8,
        32,
        w * 4,
        &CGColorSpace::create_device_rgb(),
        kCGImageAlphaLast,
        &provider,
        true,
        kCGRenderingIntentDefault,
    );
    let ns: id = msg_send![get_class("NSImage"), alloc];
    let ns: id = msg_send![
        ns,
        initWithCGImage: cg.as_ptr() as *const RawCGImage,
        size: NSSize::new(w as f64, h as f64)
    ];
    if ns == nil {
        return Err(window_failed("NSImage.initWithCGImage"));
    }
    let ns: id = msg_send![ns, autorelease];
    Ok(ns)
}

impl OverlayBackend for MacOverlayWindow {
    fn set_content_size(&mut self, size: Size) -> Result<()> {
        let ns_size = NSSize::new(size.width as f64, size.height as f64);
        unsafe {
            let _: () = msg_send![self.window, setContentSize: ns_size];
            let _: () = msg_send![self.view, setFrame: NSRect::new(NSPoint::new(0.0, 0.0), ns_size)];
        }
        self.size = size;
        Ok(())
    }

    fn set_image(&mut self, image: &RasterImage) -> Result<()> {
        unsafe {
            let ns = ns_image(image)?;
            set_view_image(self.view, ns);
        }
        Ok(())
    }

    fn set_frame_origin(&mut self, origin: Point) -> Result<()> {
        let primary = unsafe { primary_screen_height() }.ok_or(window_failed("NSScreen.screens"))?;
        let cocoa = frame_origin_to_cocoa(origin, self.size.height as f64, primary);
        unsafe {
            let _: () = msg_send![self.window, setFrameOrigin: cocoa];
        }
        Ok(())
    }

    fn set_visible(&mut self, visible: bool) -> Result<()> {
        unsafe {
            if visible {
                let _: () = msg_send![self.window, orderFrontRegardless];
            } else {
                let _: () = msg_send![self.window, orderOut: nil];
            }
        }
        Ok(())
    }

    fn close(&mut self) {
        if self.window == nil {
            return;
        }
        unsafe {
            set_view_image(self.view, nil);
            let _: () = msg_send![self.window, close];
            let _: () = msg_send![self.window, release];
        }
        self.window = nil;
        self.view = nil;
        log::debug!("[OVERLAY] Window closed");
    }
}

impl Drop for MacOverlayWindow {
    fn drop(&mut self) {
        self.close();
    }
}

/// Creates [`MacOverlayWindow`]s on the main thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct MacOverlayFactory;

impl OverlayFactory for MacOverlayFactory {
    fn create(&self) -> Result<Box<dyn OverlayBackend>> {
        let window = unsafe { MacOverlayWindow::create()? };
        Ok(Box::new(window))
    }
}
