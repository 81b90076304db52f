//! # Theme Registry
//!
//! [ThemeRegistry] owns the catalog of installable themes and knows how to resolve
//! the default one. Each [ThemeScope] created from it holds its own *active* theme,
//! so independent UI sessions in one process never see each other's choice.
//!
//! ```rust
//! use std::sync::Arc;
//! use bevel_theme::config::LookConfig;
//! use bevel_theme::registry::ThemeRegistry;
//!
//! let registry = Arc::new(ThemeRegistry::new(LookConfig::new()));
//! let scope = registry.scope();
//! let theme = scope.active_theme();
//! println!("painting with {}", theme.display_name());
//! ```

use std::sync::{Arc, PoisonError, RwLock};

use arc_swap::ArcSwapOption;
use vello::peniko::Color;

use crate::config::LookConfig;
use crate::error::{ThemeError, ThemeResult};
use crate::theme::builtin;
use crate::theme::palette::shades::ORANGE_FOCUS;
use crate::theme::{ColorRole, FontRole, FontSpec, Theme};

/// The catalog of installable themes plus the configuration used to pick a default.
pub struct ThemeRegistry {
    config: LookConfig,
    catalog: RwLock<Option<Vec<Arc<Theme>>>>,
}

impl ThemeRegistry {
    /// Create a registry; the catalog is populated on first use.
    pub fn new(config: LookConfig) -> Self {
        Self {
            config,
            catalog: RwLock::new(None),
        }
    }

    /// Create a registry configured from the process environment.
    pub fn from_env() -> Self {
        Self::new(LookConfig::from_env_or_default())
    }

    /// The configuration this registry was built with.
    pub fn config(&self) -> &LookConfig {
        &self.config
    }

    /// Create a new scope with no active theme yet.
    pub fn scope(self: &Arc<Self>) -> ThemeScope {
        ThemeScope {
            registry: Arc::clone(self),
            slot: ArcSwapOption::empty(),
        }
    }

    /// Add a theme to the catalog and return the shared instance.
    ///
    /// Names are not checked for duplicates.
    pub fn install_theme(&self, theme: Theme) -> Arc<Theme> {
        let theme = Arc::new(theme);
        self.with_catalog_mut(|catalog| catalog.push(Arc::clone(&theme)));
        theme
    }

    /// All installed themes, sorted by display name.
    pub fn list_themes(&self) -> Vec<Arc<Theme>> {
        let mut themes = self.with_catalog(|catalog| catalog.to_vec());
        themes.sort_by(|a, b| a.display_name().cmp(b.display_name()));
        themes
    }

    /// Find an installed theme by lookup or display name.
    pub fn find(&self, name: &str) -> Option<Arc<Theme>> {
        let name = name.trim();
        self.with_catalog(|catalog| catalog.iter().find(|theme| theme.is_named(name)).cloned())
    }

    /// Like [ThemeRegistry::find], but reports a missing theme as an error.
    pub fn get(&self, name: &str) -> ThemeResult<Arc<Theme>> {
        self.find(name).ok_or_else(|| ThemeError::not_found(name))
    }

    /// Resolve the theme a fresh scope starts with.
    ///
    /// A configured override is looked up in the catalog; if it does not resolve,
    /// the hard-coded fallback is used and the discrepancy is logged. Without an
    /// override the platform default is used.
    pub fn default_theme(&self) -> Arc<Theme> {
        if let Some(requested) = self.config.default_theme.as_deref() {
            return match self.find(requested) {
                Some(theme) => {
                    log::info!("Installed the '{}' theme.", theme.display_name());
                    theme
                },
                None => {
                    let fallback = self.fallback_theme();
                    log::warn!(
                        "Could not install the theme '{}'; using '{}' instead.",
                        requested,
                        fallback.display_name()
                    );
                    fallback
                },
            };
        }

        let name = self.config.platform.default_theme_name();
        match self.find(name) {
            Some(theme) => theme,
            None => match builtin::create(name) {
                Some(theme) => Arc::new(theme),
                None => self.fallback_theme(),
            },
        }
    }

    fn fallback_theme(&self) -> Arc<Theme> {
        self.find(builtin::FALLBACK_THEME)
            .unwrap_or_else(|| Arc::new(builtin::fallback()))
    }

    /// Read the catalog, taking the write lock only if it still has to be populated.
    fn with_catalog<R>(&self, f: impl FnOnce(&[Arc<Theme>]) -> R) -> R {
        {
            let guard = self.catalog.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(catalog) = guard.as_deref() {
                return f(catalog);
            }
        }
        self.with_catalog_mut(|catalog| f(catalog))
    }

    fn with_catalog_mut<R>(&self, f: impl FnOnce(&mut Vec<Arc<Theme>>) -> R) -> R {
        let mut guard = self.catalog.write().unwrap_or_else(PoisonError::into_inner);
        let catalog = guard.get_or_insert_with(|| self.populate());
        f(catalog)
    }

    fn populate(&self) -> Vec<Arc<Theme>> {
        let mut themes = Vec::with_capacity(
            self.config.installed_themes.len() + self.config.custom_themes.len(),
        );
        for name in &self.config.installed_themes {
            match builtin::create(name) {
                Some(theme) => themes.push(Arc::new(theme)),
                None => log::warn!("Skipping unknown theme '{}'", name),
            }
        }
        for spec in &self.config.custom_themes {
            themes.push(Arc::new(spec.to_theme()));
        }
        log::debug!("Populated theme catalog with {} themes", themes.len());
        themes
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new(LookConfig::new())
    }
}

/// One execution scope's view of the registry: the active theme slot.
pub struct ThemeScope {
    registry: Arc<ThemeRegistry>,
    slot: ArcSwapOption<Theme>,
}

impl ThemeScope {
    /// The registry this scope resolves defaults from.
    pub fn registry(&self) -> &Arc<ThemeRegistry> {
        &self.registry
    }

    /// The active theme, resolving and storing the default on first read.
    pub fn active_theme(&self) -> Arc<Theme> {
        if let Some(theme) = self.slot.load_full() {
            return theme;
        }
        let theme = self.registry.default_theme();
        self.slot.store(Some(Arc::clone(&theme)));
        theme
    }

    /// Whether a theme has been resolved or set in this scope.
    pub fn is_initialized(&self) -> bool {
        self.slot.load().is_some()
    }

    /// Replace the active theme.
    ///
    /// Widgets that are already painted keep their pixels until the host repaints them.
    pub fn set_active_theme(&self, theme: Option<Arc<Theme>>) -> ThemeResult<()> {
        let theme = theme.ok_or_else(|| ThemeError::invalid_argument("theme must not be empty"))?;
        log::debug!("Activating theme '{}'", theme.name());
        self.slot.store(Some(theme));
        Ok(())
    }

    /// Activate an installed theme by name.
    pub fn set_active_theme_by_name(&self, name: &str) -> ThemeResult<Arc<Theme>> {
        let theme = self.registry.get(name)?;
        self.set_active_theme(Some(Arc::clone(&theme)))?;
        Ok(theme)
    }

    /// A role color of the active theme.
    ///
    /// With high-contrast focus enabled, [ColorRole::Focus] is an orange that stands
    /// out against every built-in palette.
    pub fn color(&self, role: ColorRole) -> Color {
        if role == ColorRole::Focus && self.registry.config.high_contrast_focus {
            return ORANGE_FOCUS;
        }
        self.active_theme().color(role)
    }

    /// A role font of the active theme.
    pub fn font(&self, role: FontRole) -> FontSpec {
        self.active_theme().font(role).clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::PlatformLook;

    fn registry(config: LookConfig) -> Arc<ThemeRegistry> {
        Arc::new(ThemeRegistry::new(config))
    }

    #[test]
    fn unknown_installed_names_are_skipped() {
        let registry = registry(LookConfig::new().with_installed_themes(["SkyRed", "Plastic", "DarkStar"]));
        let names: Vec<String> = registry.list_themes().iter().map(|t| t.name().to_string()).collect();
        assert_eq!(names, ["DarkStar", "SkyRed"]);
    }

    #[test]
    fn lookups_after_population_only_read() {
        let registry = registry(LookConfig::new());
        assert!(!registry.list_themes().is_empty());

        let held = registry.catalog.read().unwrap();
        assert!(registry.find("SkyBluer").is_some());
        assert_eq!(registry.list_themes().len(), builtin::BUILTIN_THEME_NAMES.len());
        drop(held);

        registry.install_theme(builtin::fallback());
        assert_eq!(registry.list_themes().len(), builtin::BUILTIN_THEME_NAMES.len() + 1);
    }

    #[test]
    fn override_that_does_not_resolve_falls_back() {
        let registry = registry(
            LookConfig::new()
                .with_platform(PlatformLook::Modern)
                .with_default_theme("NoSuchTheme"),
        );
        assert_eq!(registry.default_theme().name(), builtin::FALLBACK_THEME);
    }

    #[test]
    fn override_resolves_by_display_name() {
        let registry = registry(LookConfig::new().with_default_theme("desert green"));
        assert_eq!(registry.default_theme().name(), "DesertGreen");
    }

    #[test]
    fn platform_default_is_built_even_when_not_installed() {
        let registry = registry(
            LookConfig::new()
                .with_platform(PlatformLook::Windows)
                .with_installed_themes(Vec::<String>::new()),
        );
        assert_eq!(registry.default_theme().name(), "DesertBluer");
    }

    #[test]
    fn empty_theme_is_an_invalid_argument() {
        let scope = registry(LookConfig::new()).scope();
        assert!(matches!(
            scope.set_active_theme(None),
            Err(ThemeError::InvalidArgument { .. })
        ));
        assert!(!scope.is_initialized());
    }

    #[test]
    fn high_contrast_focus_replaces_focus_color() {
        let scope = registry(LookConfig::new().with_high_contrast_focus(true)).scope();
        assert_eq!(crate::color::rgba8(scope.color(ColorRole::Focus)), [255, 211, 120, 255]);
        let plain = registry(LookConfig::new()).scope();
        assert_eq!(
            crate::color::rgba8(plain.color(ColorRole::Focus)),
            crate::color::rgba8(plain.active_theme().palette().primary2)
        );
    }
}
