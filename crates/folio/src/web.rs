//! # Browser Front End
//!
//! Wires the DOM to the backdrop and the site state:
//! - `mousemove` → pointer spawn
//! - `resize` → debounced canvas resize
//! - `keydown` → showcase shortcuts
//! - `popstate` → route change
//! - `requestAnimationFrame` → frame tick and background fade
//!
//! Page markup calls the [`FolioHandle`] methods for everything else: the
//! showcase toolbar, tabs and playground, the contact form and the theme
//! switch. Each call re-syncs the backdrop ink and the address bar.
//!
//! Everything lives on the UI thread behind `Rc<RefCell<_>>`. Handlers run to
//! completion, so no locking is needed. [`FolioHandle::unmount`] cancels the
//! pending frame and removes every listener.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use folio_core::{FieldConfig, ParticleField};
use folio_shared::{Vec2, Viewport};
use folio_site::{
    ContactField, PlaygroundSize, PortfolioApp, PreferenceStore, ShowcaseTab, SiteError,
    SiteResult, ToolbarAction,
};
use folio_ui::{Key, ParticleBackdrop, RenderCommand, Surface, ThemeMode};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent, Storage, Window};

/// Canvas 2D context as a [`Surface`].
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    viewport: Viewport,
}

impl CanvasSurface {
    /// Wraps a canvas element.
    ///
    /// # Errors
    ///
    /// Fails if the canvas has no 2D context.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        let viewport = Viewport::new(canvas.width(), canvas.height());
        Ok(Self {
            canvas,
            ctx,
            viewport,
        })
    }
}

impl Surface for CanvasSurface {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn resize(&mut self, viewport: Viewport) {
        // Setting either dimension also clears the bitmap
        self.canvas.set_width(viewport.width);
        self.canvas.set_height(viewport.height);
        self.viewport = viewport;
    }

    fn draw(&mut self, commands: &[RenderCommand]) {
        for command in commands {
            match *command {
                RenderCommand::Clear { viewport } => {
                    self.ctx.clear_rect(
                        0.0,
                        0.0,
                        f64::from(viewport.width),
                        f64::from(viewport.height),
                    );
                }
                RenderCommand::FillCircle {
                    center,
                    radius,
                    color,
                } => {
                    self.ctx.set_fill_style_str(&color.to_css());
                    self.ctx.begin_path();
                    if self
                        .ctx
                        .arc(
                            f64::from(center.x),
                            f64::from(center.y),
                            f64::from(radius),
                            0.0,
                            std::f64::consts::TAU,
                        )
                        .is_ok()
                    {
                        self.ctx.fill();
                    }
                }
                RenderCommand::StrokeLine {
                    from,
                    to,
                    color,
                    width,
                } => {
                    self.ctx.set_stroke_style_str(&color.to_css());
                    self.ctx.set_line_width(f64::from(width));
                    self.ctx.begin_path();
                    self.ctx.move_to(f64::from(from.x), f64::from(from.y));
                    self.ctx.line_to(f64::from(to.x), f64::from(to.y));
                    self.ctx.stroke();
                }
            }
        }
    }
}

/// `localStorage` as a [`PreferenceStore`].
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    /// Opens the window's local storage. Private browsing may deny it.
    #[must_use]
    pub fn open(window: &Window) -> Self {
        Self {
            storage: window.local_storage().ok().flatten(),
        }
    }

    fn storage(&self, key: &str) -> SiteResult<&Storage> {
        self.storage.as_ref().ok_or_else(|| SiteError::Storage {
            key: key.to_owned(),
            reason: "localStorage unavailable".into(),
        })
    }
}

fn storage_error(key: &str, e: &JsValue) -> SiteError {
    SiteError::Storage {
        key: key.to_owned(),
        reason: format!("{e:?}"),
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> SiteResult<Option<String>> {
        self.storage(key)?
            .get_item(key)
            .map_err(|e| storage_error(key, &e))
    }

    fn set(&mut self, key: &str, value: &str) -> SiteResult<()> {
        self.storage(key)?
            .set_item(key, value)
            .map_err(|e| storage_error(key, &e))
    }
}

/// State shared by every callback.
struct Shared {
    window: Window,
    backdrop: ParticleBackdrop<CanvasSurface>,
    app: PortfolioApp<LocalStore>,
    last_frame_ms: Option<f64>,
}

impl Shared {
    fn now_ms(&self) -> f64 {
        self.window
            .performance()
            .map_or_else(js_sys::Date::now, |p| p.now())
    }

    /// Pushes the app's path to the address bar if it moved.
    fn sync_history(&self, before: &str) {
        let path = self.app.path();
        if path == before {
            return;
        }
        if let Ok(history) = self.window.history() {
            if history
                .push_state_with_url(&JsValue::NULL, "", Some(&path))
                .is_err()
            {
                tracing::warn!(path = %path, "history push failed");
            }
        }
    }

    /// Keeps the backdrop ink in step with the site theme.
    fn sync_theme(&mut self) {
        self.backdrop.set_dark(self.app.is_dark());
    }

    /// Returns false once the backdrop has been shut down.
    #[allow(clippy::cast_possible_truncation)]
    fn on_frame(&mut self, now_ms: f64) -> bool {
        let dt = self
            .last_frame_ms
            .map_or(0.0, |last| ((now_ms - last) / 1000.0) as f32);
        self.last_frame_ms = Some(now_ms);
        self.app.tick(now_ms, dt);
        self.backdrop.on_frame(now_ms);
        self.backdrop.is_running()
    }
}

fn window_viewport(window: &Window) -> Viewport {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let dimension = |v: Result<JsValue, JsValue>| {
        v.ok().and_then(|v| v.as_f64()).map_or(0, |v| v.max(0.0) as u32)
    };
    Viewport::new(
        dimension(window.inner_width()),
        dimension(window.inner_height()),
    )
}

type FrameCallback = Closure<dyn FnMut(f64)>;

struct Listener {
    event: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

/// A mounted site. Dropping it unmounts.
#[wasm_bindgen]
pub struct FolioHandle {
    window: Window,
    state: Rc<RefCell<Shared>>,
    raf_id: Rc<Cell<Option<i32>>>,
    frame: Rc<RefCell<Option<FrameCallback>>>,
    listeners: Vec<Listener>,
}

#[wasm_bindgen]
impl FolioHandle {
    /// Current path.
    #[must_use]
    pub fn path(&self) -> String {
        self.state.borrow().app.path()
    }

    /// Current theme, `"dark"` or `"light"`.
    #[must_use]
    pub fn theme(&self) -> String {
        self.state.borrow().app.theme().as_str().to_owned()
    }

    /// Page background as a CSS color, mid-fade after a theme change.
    #[must_use]
    pub fn background_css(&self) -> String {
        self.state.borrow().app.background().to_css()
    }

    /// Flips the site theme.
    pub fn toggle_theme(&self) {
        self.update(PortfolioApp::toggle_theme);
    }

    /// Overlay toolbar press: `principles`, `impact`, `system`, `code`,
    /// `theme` or `full`. Returns false for an unknown button.
    pub fn toolbar(&self, action: &str) -> bool {
        let Some(action) = ToolbarAction::parse(action) else {
            return false;
        };
        self.update(|app| app.toolbar(action));
        true
    }

    /// Close or back button of either showcase.
    pub fn close_showcase(&self) {
        self.update(PortfolioApp::close_showcase);
    }

    /// Selected full-page tab, if on the full page.
    #[must_use]
    pub fn tab(&self) -> Option<String> {
        self.state
            .borrow()
            .app
            .showcase_page()
            .map(|page| page.tab().as_str().to_owned())
    }

    /// Selects a full-page tab by name. Returns false for an unknown tab.
    pub fn select_tab(&self, tab: &str) -> bool {
        let Some(tab) = ShowcaseTab::parse(tab) else {
            return false;
        };
        self.update(|app| app.select_tab(tab));
        true
    }

    /// Playground size `sm`, `md` or `lg`; persisted.
    pub fn set_playground_size(&self, size: &str) -> bool {
        let Some(size) = PlaygroundSize::parse(size) else {
            return false;
        };
        self.update(|app| app.set_playground_size(size));
        true
    }

    /// Playground preview theme, `dark` or `light`.
    pub fn set_playground_theme(&self, theme: &str) -> bool {
        let Some(theme) = ThemeMode::parse(theme) else {
            return false;
        };
        self.update(|app| app.set_playground_theme(theme));
        true
    }

    /// Shows or hides the playground code panel.
    pub fn set_playground_code(&self, show: bool) {
        self.update(|app| app.set_playground_code(show));
    }

    /// Replaces a contact field (`name`, `email` or `message`).
    pub fn set_contact_field(&self, field: &str, value: &str) -> bool {
        let Some(field) = ContactField::parse(field) else {
            return false;
        };
        self.update(|app| app.contact_mut().set(field, value));
        true
    }

    /// Submits the contact form. False while a confirmation is showing.
    pub fn submit_contact(&self) -> bool {
        let mut state = self.state.borrow_mut();
        let now = state.now_ms();
        state.app.contact_mut().submit(now)
    }

    /// True while the "sent" confirmation is shown.
    #[must_use]
    pub fn contact_submitted(&self) -> bool {
        self.state.borrow().app.contact().is_submitted()
    }

    /// Navigates to a path and records it in the history.
    pub fn navigate(&self, path: &str) {
        let mut state = self.state.borrow_mut();
        let before = state.window.location().pathname().unwrap_or_default();
        state.app.navigate(path);
        state.sync_history(&before);
    }

    /// Stops the animation and removes every listener. Idempotent.
    pub fn unmount(&mut self) {
        if let Some(id) = self.raf_id.take() {
            if self.window.cancel_animation_frame(id).is_err() {
                tracing::warn!("cancel_animation_frame failed");
            }
        }
        self.frame.borrow_mut().take();

        for listener in self.listeners.drain(..) {
            if self
                .window
                .remove_event_listener_with_callback(
                    listener.event,
                    listener.callback.as_ref().unchecked_ref(),
                )
                .is_err()
            {
                tracing::warn!(event = listener.event, "remove_event_listener failed");
            }
        }

        if let Ok(mut state) = self.state.try_borrow_mut() {
            let _ = state.backdrop.shutdown();
        }
    }
}

impl Drop for FolioHandle {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Installs the panic hook.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// Mounts the backdrop on the canvas with id `canvas_id` and starts the site
/// at the current location.
///
/// # Errors
///
/// Fails if there is no window, no such canvas, or no 2D context.
#[wasm_bindgen]
pub fn mount(canvas_id: &str) -> Result<FolioHandle, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| JsValue::from_str("backdrop canvas not found"))?
        .dyn_into::<HtmlCanvasElement>()?;
    // Decorative only: never take pointer input, never affect layout
    canvas.set_attribute("style", "position:fixed;inset:0;pointer-events:none;z-index:0")?;

    let app = PortfolioApp::new(LocalStore::open(&window))
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let mut backdrop = ParticleBackdrop::new(
        ParticleField::from_entropy(FieldConfig::default()),
        app.is_dark(),
    );
    backdrop.mount(CanvasSurface::new(canvas)?, window_viewport(&window));

    let state = Rc::new(RefCell::new(Shared {
        window: window.clone(),
        backdrop,
        app,
        last_frame_ms: None,
    }));
    {
        let mut state = state.borrow_mut();
        let path = window.location().pathname().unwrap_or_default();
        let resolution = state.app.navigate(&path);
        if resolution.redirected {
            state.sync_history(&path);
        }
    }

    let mut handle = FolioHandle {
        window: window.clone(),
        state: Rc::clone(&state),
        raf_id: Rc::new(Cell::new(None)),
        frame: Rc::new(RefCell::new(None)),
        listeners: Vec::with_capacity(4),
    };

    handle.listen("mousemove", {
        let state = Rc::clone(&state);
        move |event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            #[allow(clippy::cast_precision_loss)]
            let position = Vec2::new(event.client_x() as f32, event.client_y() as f32);
            state
                .borrow_mut()
                .backdrop
                .on_pointer_move(position, event.time_stamp());
        }
    })?;

    handle.listen("resize", {
        let state = Rc::clone(&state);
        move |_| {
            let mut state = state.borrow_mut();
            let viewport = window_viewport(&state.window);
            let now = state.now_ms();
            state.backdrop.on_resize(viewport, now);
        }
    })?;

    handle.listen("keydown", {
        let state = Rc::clone(&state);
        move |event| {
            let Some(key) = event
                .dyn_ref::<KeyboardEvent>()
                .and_then(|e| Key::from_dom_key(&e.key()))
            else {
                return;
            };
            let mut state = state.borrow_mut();
            let before = state.app.path();
            state.app.handle_key(key);
            state.sync_theme();
            state.sync_history(&before);
        }
    })?;

    handle.listen("popstate", {
        let state = Rc::clone(&state);
        move |_| {
            let mut state = state.borrow_mut();
            let path = state.window.location().pathname().unwrap_or_default();
            state.app.navigate(&path);
        }
    })?;

    handle.start_frames()?;
    tracing::info!(canvas = canvas_id, "folio mounted");
    Ok(handle)
}

impl FolioHandle {
    /// Runs a site update, then syncs the backdrop ink and the address bar.
    fn update<R>(&self, f: impl FnOnce(&mut PortfolioApp<LocalStore>) -> R) -> R {
        let mut state = self.state.borrow_mut();
        let before = state.app.path();
        let result = f(&mut state.app);
        state.sync_theme();
        state.sync_history(&before);
        result
    }

    fn listen(
        &mut self,
        event: &'static str,
        callback: impl FnMut(web_sys::Event) + 'static,
    ) -> Result<(), JsValue> {
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut(web_sys::Event)>);
        self.window
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        self.listeners.push(Listener { event, callback });
        Ok(())
    }

    fn start_frames(&self) -> Result<(), JsValue> {
        let frame_ref = Rc::clone(&self.frame);
        let raf_id = Rc::clone(&self.raf_id);
        let state = Rc::clone(&self.state);
        let window = self.window.clone();

        *self.frame.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
            raf_id.set(None);
            if !state.borrow_mut().on_frame(now_ms) {
                return;
            }
            if let Some(callback) = frame_ref.borrow().as_ref() {
                raf_id.set(
                    window
                        .request_animation_frame(callback.as_ref().unchecked_ref())
                        .ok(),
                );
            }
        }) as Box<dyn FnMut(f64)>));

        let id = match self.frame.borrow().as_ref() {
            Some(callback) => self
                .window
                .request_animation_frame(callback.as_ref().unchecked_ref())?,
            None => return Ok(()),
        };
        self.raf_id.set(Some(id));
        Ok(())
    }
}
