use crate::core::settings::{FontChoice, FontFamilyKind};
use egui::{Color32, Context, FontFamily, FontId, Stroke, Visuals};

// Paper-like light theme: the document should look like what gets printed
pub fn apply_theme(ctx: &Context) {
    let mut visuals = Visuals::light();

    visuals.panel_fill = Color32::from_rgb(240, 240, 240);
    visuals.window_fill = Color32::from_rgb(250, 250, 250);
    visuals.extreme_bg_color = Color32::WHITE;

    visuals.selection.bg_fill = Color32::from_rgb(0, 120, 215);
    visuals.selection.stroke = Stroke::new(1.0, Color32::WHITE);

    visuals.widgets.noninteractive.bg_fill = Color32::from_rgb(240, 240, 240);
    visuals.widgets.hovered.bg_fill = Color32::from_rgb(229, 241, 251);
    visuals.widgets.active.bg_fill = Color32::from_rgb(204, 228, 247);

    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style
        .text_styles
        .insert(egui::TextStyle::Body, egui::FontId::proportional(13.0));
    style
        .text_styles
        .insert(egui::TextStyle::Button, egui::FontId::proportional(13.0));

    ctx.set_style(style);
}

pub fn font_id(font: &FontChoice) -> FontId {
    let family = match font.family {
        FontFamilyKind::Monospace => FontFamily::Monospace,
        FontFamilyKind::Proportional => FontFamily::Proportional,
    };
    FontId::new(font.size, family)
}
