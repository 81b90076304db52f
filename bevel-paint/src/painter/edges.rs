//! Edge primitives shared by border painters.
//!
//! Every function draws inside the `width` by `height` box at `(x, y)` and never
//! touches pixels outside it. Colors come from the context's theme roles.

use bevel_theme::theme::ColorRole::*;

use crate::painter::PaintContext;

/// The standard raised edge: dark outline, highlight one pixel in.
pub fn flush_3d(cx: &mut PaintContext<'_>, x: i32, y: i32, w: i32, h: i32) {
    cx.rect(x, y, w - 2, h - 2, ControlDarkShadow);
    cx.rect(x + 1, y + 1, w - 2, h - 2, ControlHighlight);
    cx.line(x, y + h - 1, x + 1, y + h - 2, Control);
    cx.line(x + w - 1, y, x + w - 2, y + 1, Control);
}

/// A raised edge with the top-left highlight replaced by shadow.
pub fn pressed_3d(cx: &mut PaintContext<'_>, x: i32, y: i32, w: i32, h: i32) {
    flush_3d(cx, x, y, w, h);
    cx.line(x + 1, y + 1, x + 1, y + h - 2, ControlShadow);
    cx.line(x + 1, y + 1, x + w - 2, y + 1, ControlShadow);
}

/// A raised edge whose inner highlight is toned down, used for toggled-on buttons.
pub fn dark_3d(cx: &mut PaintContext<'_>, x: i32, y: i32, w: i32, h: i32) {
    flush_3d(cx, x, y, w, h);
    cx.line(x + 1, y + 1, x + 1, y + h - 2, Control);
    cx.line(x + 1, y + 1, x + w - 2, y + 1, Control);
    cx.line(x + 1, y + h - 2, x + 1, y + h - 2, ControlShadow);
    cx.line(x + w - 2, y + 1, x + w - 2, y + 1, ControlShadow);
}

/// A single shadow-colored outline.
pub fn disabled(cx: &mut PaintContext<'_>, x: i32, y: i32, w: i32, h: i32) {
    cx.rect(x, y, w - 1, h - 1, ControlShadow);
}

/// A single dark outline, drawn instead of [flush_3d] when 3-D effects are off.
pub fn flat(cx: &mut PaintContext<'_>, x: i32, y: i32, w: i32, h: i32) {
    cx.rect(x, y, w - 1, h - 1, ControlDarkShadow);
}

/// A raised edge with primary-colored bevels, used under the pointer.
pub fn active(cx: &mut PaintContext<'_>, x: i32, y: i32, w: i32, h: i32) {
    flush_3d(cx, x, y, w, h);
    cx.line(x + 1, y + 1, x + 1, y + h - 3, PrimaryControl);
    cx.line(x + 1, y + 1, x + w - 3, y + 1, PrimaryControl);
    cx.line(x + 2, y + h - 2, x + w - 2, y + h - 2, PrimaryControlDarkShadow);
    cx.line(x + w - 2, y + 2, x + w - 2, y + h - 2, PrimaryControlDarkShadow);
}

/// The resting edge of a button: [active] under the pointer, [flat] without 3-D
/// effects, [flush_3d] otherwise.
pub fn raised(cx: &mut PaintContext<'_>, x: i32, y: i32, w: i32, h: i32, hovered: bool, is_3d: bool) {
    if !is_3d {
        flat(cx, x, y, w, h);
    } else if hovered {
        active(cx, x, y, w, h);
    } else {
        flush_3d(cx, x, y, w, h);
    }
}

/// The default button: the regular edge shifted in by one pixel and a dark frame.
pub fn default_button(cx: &mut PaintContext<'_>, x: i32, y: i32, w: i32, h: i32, hovered: bool, is_3d: bool) {
    raised(cx, x + 1, y + 1, w - 1, h - 1, hovered, is_3d);
    default_frame(cx, x, y, w, h);
}

/// The default button while pressed.
pub fn default_button_pressed(cx: &mut PaintContext<'_>, x: i32, y: i32, w: i32, h: i32) {
    pressed_3d(cx, x + 1, y + 1, w - 1, h - 1);
    default_frame(cx, x, y, w, h);
    cx.line(x + w - 1, y, x + w - 1, y, Control);
    cx.line(x, y + h - 1, x, y + h - 1, Control);
}

fn default_frame(cx: &mut PaintContext<'_>, x: i32, y: i32, w: i32, h: i32) {
    cx.rect(x, y, w - 3, h - 3, ControlDarkShadow);
    cx.line(x + w - 2, y, x + w - 2, y, ControlDarkShadow);
    cx.line(x, y + h - 2, x, y + h - 2, ControlDarkShadow);
}

/// A focus-colored rectangle just inside a raised edge.
pub fn focus_ring(cx: &mut PaintContext<'_>, x: i32, y: i32, w: i32, h: i32) {
    cx.rect(x + 2, y + 2, w - 5, h - 5, Focus);
}

/// Highlight on the top and left, dark shadow on the right and bottom.
pub fn thin_raised(cx: &mut PaintContext<'_>, x: i32, y: i32, w: i32, h: i32) {
    cx.line(x, y, x + w - 2, y, ControlHighlight);
    cx.line(x, y, x, y + h - 2, ControlHighlight);
    cx.line(x + w - 1, y, x + w - 1, y + h - 1, ControlDarkShadow);
    cx.line(x, y + h - 1, x + w - 1, y + h - 1, ControlDarkShadow);
}

/// Dark shadow on the top and left, highlight on the right and bottom.
pub fn thin_lowered(cx: &mut PaintContext<'_>, x: i32, y: i32, w: i32, h: i32) {
    cx.line(x, y, x + w - 2, y, ControlDarkShadow);
    cx.line(x, y, x, y + h - 2, ControlDarkShadow);
    cx.line(x + w - 1, y, x + w - 1, y + h - 1, ControlHighlight);
    cx.line(x, y + h - 1, x + w - 1, y + h - 1, ControlHighlight);
}

/// A groove: shadow outline with a highlight outline one pixel down and right.
pub fn etched(cx: &mut PaintContext<'_>, x: i32, y: i32, w: i32, h: i32) {
    cx.rect(x, y, w - 2, h - 2, ControlShadow);
    cx.rect(x + 1, y + 1, w - 2, h - 2, ControlHighlight);
}

/// A shadow line over a highlight line along the bottom.
pub fn separator(cx: &mut PaintContext<'_>, x: i32, y: i32, w: i32, h: i32) {
    cx.line(x, y + h - 2, x + w - 1, y + h - 2, ControlShadow);
    cx.line(x, y + h - 1, x + w - 1, y + h - 1, ControlHighlight);
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use bevel_theme::color::rgba8;
    use bevel_theme::registry::ThemeRegistry;

    use super::*;
    use crate::bumps::BumpCache;
    use crate::surface::Pixmap;

    fn paint(draw: impl FnOnce(&mut PaintContext<'_>)) -> (Pixmap, Arc<bevel_theme::theme::Theme>) {
        let scope = Arc::new(ThemeRegistry::default()).scope();
        let bumps = BumpCache::new(1);
        let mut pixmap = Pixmap::new(12, 12);
        let theme = {
            let mut cx = PaintContext::new(&mut pixmap, &scope, &bumps);
            draw(&mut cx);
            Arc::clone(cx.theme())
        };
        (pixmap, theme)
    }

    fn every_primitive(cx: &mut PaintContext<'_>) {
        flush_3d(cx, 0, 0, 10, 10);
        pressed_3d(cx, 0, 0, 10, 10);
        dark_3d(cx, 0, 0, 10, 10);
        disabled(cx, 0, 0, 10, 10);
        flat(cx, 0, 0, 10, 10);
        active(cx, 0, 0, 10, 10);
        default_button(cx, 0, 0, 10, 10, true, true);
        default_button_pressed(cx, 0, 0, 10, 10);
        focus_ring(cx, 0, 0, 10, 10);
        thin_raised(cx, 0, 0, 10, 10);
        thin_lowered(cx, 0, 0, 10, 10);
        etched(cx, 0, 0, 10, 10);
        separator(cx, 0, 0, 10, 10);
    }

    #[test]
    fn primitives_stay_inside_their_box() {
        let (pixmap, _) = paint(every_primitive);
        for y in 0..12 {
            for x in 0..12 {
                if x >= 10 || y >= 10 {
                    assert!(!pixmap.is_set(x, y), "({x}, {y}) drawn outside");
                }
            }
        }
    }

    #[test]
    fn flush_3d_layout() {
        let (pixmap, theme) = paint(|cx| flush_3d(cx, 0, 0, 10, 10));
        let dark = rgba8(theme.color(ControlDarkShadow));
        let light = rgba8(theme.color(ControlHighlight));
        let control = rgba8(theme.color(Control));
        assert_eq!(pixmap.pixel(0, 0), Some(dark));
        assert_eq!(pixmap.pixel(8, 8), Some(dark));
        assert_eq!(pixmap.pixel(9, 9), Some(light));
        assert_eq!(pixmap.pixel(1, 1), Some(light));
        assert_eq!(pixmap.pixel(0, 9), Some(control));
        assert_eq!(pixmap.pixel(9, 0), Some(control));
        assert!(!pixmap.is_set(4, 4));
    }

    #[test]
    fn pressed_replaces_inner_highlight_with_shadow() {
        let (pixmap, theme) = paint(|cx| pressed_3d(cx, 0, 0, 10, 10));
        assert_eq!(pixmap.pixel(1, 1), Some(rgba8(theme.color(ControlShadow))));
        assert_eq!(pixmap.pixel(9, 9), Some(rgba8(theme.color(ControlHighlight))));
    }
}
