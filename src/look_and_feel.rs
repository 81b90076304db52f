//! # Look and Feel
//!
//! [LookAndFeel] ties one theme scope to the painters, the bump cache and the
//! UI defaults table. A host creates one per UI session, installs it, and routes
//! every border and icon paint through it.
//!
//! ```rust
//! use bevel::look_and_feel::LookAndFeel;
//! use bevel::paint::geometry::Rect;
//! use bevel::paint::painter::BorderKind;
//! use bevel::paint::surface::Pixmap;
//! use bevel::paint::widget::WidgetView;
//!
//! let laf = LookAndFeel::from_env();
//! laf.install();
//!
//! let mut pixmap = Pixmap::new(80, 24);
//! laf.paint_border(&mut pixmap, BorderKind::Button, &WidgetView::button(), Rect::new(0, 0, 80, 24))
//!     .unwrap();
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use bevel_paint::bumps::BumpCache;
use bevel_paint::device::DeviceConfig;
use bevel_paint::error::PaintResult;
use bevel_paint::geometry::Rect;
use bevel_paint::painter::{Border, BorderKind, Icon, IconKind, PaintContext, PainterFactory};
use bevel_paint::surface::Surface;
use bevel_paint::widget::WidgetModel;
use bevel_theme::error::ThemeResult;
use bevel_theme::registry::{ThemeRegistry, ThemeScope};
use bevel_theme::theme::{ColorRole, FontRole, FontSpec, Theme};
use bevel_theme::Color;

use crate::defaults::{self, DefaultValue, UiDefaults};

/// One UI session's theme, painters and defaults.
pub struct LookAndFeel {
    scope: ThemeScope,
    painters: PainterFactory,
    bumps: BumpCache,
    defaults: RwLock<UiDefaults>,
    device: Option<DeviceConfig>,
    installed: AtomicBool,
}

impl LookAndFeel {
    /// Name reported to hosts.
    pub const NAME: &'static str = "Bevel";

    /// Create a session over a shared registry.
    pub fn new(registry: Arc<ThemeRegistry>) -> Self {
        let capacity = registry.config().bump_cache_capacity;
        Self {
            scope: registry.scope(),
            painters: PainterFactory::new(),
            bumps: BumpCache::new(capacity),
            defaults: RwLock::new(UiDefaults::new()),
            device: None,
            installed: AtomicBool::new(false),
        }
    }

    /// Create a session with its own registry configured from the environment.
    pub fn from_env() -> Self {
        Self::new(Arc::new(ThemeRegistry::from_env()))
    }

    /// Paint for a specific device.
    pub fn with_device(mut self, device: DeviceConfig) -> Self {
        self.device = Some(device);
        self
    }

    /// The registry themes are resolved from.
    pub fn registry(&self) -> &Arc<ThemeRegistry> {
        self.scope.registry()
    }

    /// This session's theme scope.
    pub fn scope(&self) -> &ThemeScope {
        &self.scope
    }

    /// The painter cache.
    pub fn painters(&self) -> &PainterFactory {
        &self.painters
    }

    /// The bump texture cache.
    pub fn bump_cache(&self) -> &BumpCache {
        &self.bumps
    }

    /// Whether [LookAndFeel::install] has run.
    pub fn is_installed(&self) -> bool {
        self.installed.load(Ordering::Acquire)
    }

    /// Resolve the active theme and (re)populate the defaults table.
    ///
    /// Reinstalling drops cached painters so the table holds fresh instances; any
    /// other entries the host put into the table survive.
    pub fn install(&self) {
        let theme = self.scope.active_theme();
        if self.installed.swap(true, Ordering::AcqRel) {
            log::debug!("Reinstalling look and feel, dropping cached painters");
            self.painters.invalidate();
        }
        let mut table = match self.defaults.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        defaults::populate(&mut table, &self.painters, self.registry().config(), theme.name());
        log::info!(
            "Installed {} look with the '{}' theme ({} defaults)",
            Self::NAME,
            theme.display_name(),
            table.len()
        );
    }

    /// Replace the active theme. Call [LookAndFeel::install] again to refresh the defaults.
    pub fn set_theme(&self, theme: Option<Arc<Theme>>) -> ThemeResult<()> {
        self.scope.set_active_theme(theme)
    }

    /// Activate an installed theme by name.
    pub fn set_theme_by_name(&self, name: &str) -> ThemeResult<Arc<Theme>> {
        self.scope.set_active_theme_by_name(name)
    }

    /// The active theme.
    pub fn theme(&self) -> Arc<Theme> {
        self.scope.active_theme()
    }

    /// A snapshot of the defaults table.
    pub fn defaults(&self) -> UiDefaults {
        match self.defaults.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Look up one default.
    pub fn default_value(&self, key: &str) -> Option<DefaultValue> {
        match self.defaults.read() {
            Ok(guard) => guard.get(key).cloned(),
            Err(poisoned) => poisoned.into_inner().get(key).cloned(),
        }
    }

    /// Add or replace a host-defined default.
    pub fn put_default(&self, key: impl Into<String>, value: DefaultValue) -> Option<DefaultValue> {
        match self.defaults.write() {
            Ok(mut guard) => guard.put(key, value),
            Err(poisoned) => poisoned.into_inner().put(key, value),
        }
    }

    /// The shared border painter of a kind.
    pub fn border(&self, kind: BorderKind) -> Arc<dyn Border> {
        self.painters.border(kind)
    }

    /// The shared icon painter of a kind.
    pub fn icon(&self, kind: IconKind) -> Arc<dyn Icon> {
        self.painters.icon(kind)
    }

    /// A role color of the active theme.
    pub fn color(&self, role: ColorRole) -> Color {
        self.scope.color(role)
    }

    /// A role font of the active theme.
    pub fn font(&self, role: FontRole) -> FontSpec {
        self.scope.font(role)
    }

    /// Open a paint context over `surface`.
    pub fn context<'a>(&'a self, surface: &'a mut dyn Surface) -> PaintContext<'a> {
        let cx = PaintContext::new(surface, &self.scope, &self.bumps);
        match self.device {
            Some(device) => cx.with_device(device),
            None => cx,
        }
    }

    /// Paint a border of `kind` around `area`.
    pub fn paint_border(
        &self,
        surface: &mut dyn Surface,
        kind: BorderKind,
        widget: &dyn WidgetModel,
        area: Rect,
    ) -> PaintResult<()> {
        let border = self.painters.border(kind);
        border.paint(&mut self.context(surface), widget, area)
    }

    /// Paint an icon of `kind` into `area`.
    pub fn paint_icon(
        &self,
        surface: &mut dyn Surface,
        kind: IconKind,
        widget: &dyn WidgetModel,
        area: Rect,
    ) -> PaintResult<()> {
        let icon = self.painters.icon(kind);
        icon.paint(&mut self.context(surface), widget, area)
    }
}

impl Default for LookAndFeel {
    fn default() -> Self {
        Self::new(Arc::new(ThemeRegistry::default()))
    }
}
