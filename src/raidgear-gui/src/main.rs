mod app;
mod jobs;
mod route;
mod ui;

use eframe::egui;

fn main() -> eframe::Result<()> {
    // Optional starting path, e.g. `raidgear-gui /equipment/sets/12`
    let start_page = std::env::args()
        .nth(1)
        .map(|path| route::parse(&path))
        .unwrap_or_default();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 840.0])
            .with_min_inner_size([960.0, 640.0]),
        ..Default::default()
    };

    eframe::run_native(
        "raidgear",
        options,
        Box::new(move |cc| {
            let mut style = (*cc.egui_ctx.style()).clone();

            // Text sizes
            style
                .text_styles
                .insert(egui::TextStyle::Body, egui::FontId::proportional(15.0));
            style
                .text_styles
                .insert(egui::TextStyle::Button, egui::FontId::proportional(15.0));
            style
                .text_styles
                .insert(egui::TextStyle::Heading, egui::FontId::proportional(24.0));
            style
                .text_styles
                .insert(egui::TextStyle::Small, egui::FontId::proportional(13.0));

            // Roomier controls for the form-heavy pages
            style.spacing.item_spacing = egui::vec2(10.0, 8.0);
            style.spacing.button_padding = egui::vec2(12.0, 6.0);
            style.spacing.indent = 24.0;
            style.spacing.window_margin = egui::Margin::same(16.0);
            style.spacing.interact_size.y = 26.0;

            // Dark, low-contrast look
            let visuals = &mut style.visuals;
            visuals.panel_fill = egui::Color32::from_rgb(30, 32, 36);
            visuals.window_fill = egui::Color32::from_rgb(36, 38, 43);
            visuals.extreme_bg_color = egui::Color32::from_rgb(24, 26, 29);
            visuals.faint_bg_color = egui::Color32::from_rgb(38, 40, 45);
            visuals.selection.bg_fill = egui::Color32::from_rgb(58, 76, 98);
            visuals.hyperlink_color = egui::Color32::from_rgb(110, 160, 255);
            visuals.window_shadow = egui::epaint::Shadow::NONE;

            visuals.widgets.noninteractive.rounding = egui::Rounding::same(3.0);
            visuals.widgets.inactive.rounding = egui::Rounding::same(3.0);
            visuals.widgets.hovered.rounding = egui::Rounding::same(3.0);
            visuals.widgets.active.rounding = egui::Rounding::same(3.0);
            visuals.widgets.open.rounding = egui::Rounding::same(3.0);
            visuals.window_rounding = egui::Rounding::same(3.0);
            visuals.menu_rounding = egui::Rounding::same(3.0);

            cc.egui_ctx.set_style(style);

            Ok(Box::new(app::GearApp::new(cc, start_page)))
        }),
    )
}
