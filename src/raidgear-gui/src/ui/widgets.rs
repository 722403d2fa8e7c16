//! Widgets shared across the equipment pages.

use eframe::egui;
use raidgear::{
    progress_percent, tier_for_level, Equipment, EquipmentSlot, SetForm, SetKind,
};

/// Item level rendered in its tier's color; the tier name shows on hover.
pub fn tier_label(ui: &mut egui::Ui, item_level: i32) {
    let tier = tier_for_level(item_level);
    let (r, g, b) = tier.color;
    ui.label(
        egui::RichText::new(format!("IL {}", item_level))
            .color(egui::Color32::from_rgb(r, g, b))
            .strong(),
    )
    .on_hover_text(tier.name);
}

/// Purpose badge for a set; normal sets get no badge.
pub fn kind_badge(ui: &mut egui::Ui, kind: SetKind) {
    let color = match kind {
        SetKind::BestInSlot => egui::Color32::from_rgb(245, 158, 11),
        SetKind::Current => egui::Color32::from_rgb(59, 130, 246),
        SetKind::Starting => egui::Color32::from_rgb(107, 114, 128),
        SetKind::Normal => return,
    };
    ui.label(egui::RichText::new(kind.display_name()).color(color).strong());
}

/// 4-way purpose toggle; selecting one choice clears the others by
/// construction since the field is a single enum.
pub fn kind_toggle(ui: &mut egui::Ui, kind: &mut SetKind) {
    ui.horizontal(|ui| {
        for &choice in SetKind::ALL {
            ui.selectable_value(kind, choice, choice.display_name());
        }
    });
}

/// Obtained progress rendered as a bar with a count caption
pub fn progress_bar(ui: &mut egui::Ui, obtained: usize, total: usize) {
    let percent = progress_percent(obtained, total);
    ui.add(
        egui::ProgressBar::new(percent as f32 / 100.0)
            .text(format!("{} / {} obtained ({}%)", obtained, total, percent))
            .desired_width(220.0),
    );
}

/// Inline field validation message
pub fn field_error(ui: &mut egui::Ui, message: &str) {
    ui.label(
        egui::RichText::new(message)
            .color(egui::Color32::from_rgb(240, 120, 120))
            .small(),
    );
}

/// Centered spinner while a page load is in flight
pub fn loading_note(ui: &mut egui::Ui, what: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(120.0);
        ui.spinner();
        ui.add_space(12.0);
        ui.label(egui::RichText::new(format!("Loading {}...", what)).weak());
    });
}

/// Full-page load failure. Returns true when the user asks to retry.
pub fn load_failed(ui: &mut egui::Ui, message: &str) -> bool {
    let mut retry = false;
    ui.vertical_centered(|ui| {
        ui.add_space(120.0);
        ui.colored_label(egui::Color32::from_rgb(240, 120, 120), message);
        ui.add_space(12.0);
        if ui.button("Retry").clicked() {
            retry = true;
        }
    });
    retry
}

/// Centered placeholder for pages with nothing to show yet
pub fn empty_note(ui: &mut egui::Ui, icon: &str, title: &str, hint: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(100.0);
        ui.label(egui::RichText::new(icon).size(48.0).weak());
        ui.add_space(16.0);
        ui.heading(title);
        ui.add_space(10.0);
        ui.label(egui::RichText::new(hint).weak());
    });
}

/// A click on one slot-assignment row
#[derive(Debug, Clone, Copy)]
pub enum SlotRowCmd {
    Pick(EquipmentSlot),
    Clear(EquipmentSlot),
}

/// The fixed one-row-per-slot assignment grid shared by the set create
/// and edit pages. Returns the action the user clicked, if any.
pub fn slot_assignment_rows(ui: &mut egui::Ui, form: &SetForm) -> Option<SlotRowCmd> {
    let mut cmd = None;
    egui::Grid::new("slot_assignment_grid")
        .num_columns(3)
        .spacing([24.0, 8.0])
        .striped(true)
        .show(ui, |ui| {
            for row in &form.rows {
                ui.label(egui::RichText::new(row.slot.display_name()).strong());
                match &row.equipment {
                    Some(equipment) => {
                        ui.horizontal(|ui| {
                            ui.label(&equipment.name);
                            tier_label(ui, equipment.item_level);
                            ui.label(
                                egui::RichText::new(equipment.equipment_type.display_name())
                                    .weak(),
                            );
                        });
                        ui.horizontal(|ui| {
                            if ui.button("Change").clicked() {
                                cmd = Some(SlotRowCmd::Pick(row.slot));
                            }
                            if ui.button("Clear").clicked() {
                                cmd = Some(SlotRowCmd::Clear(row.slot));
                            }
                        });
                    }
                    None => {
                        ui.label(egui::RichText::new("Empty").weak());
                        if ui.button("Assign").clicked() {
                            cmd = Some(SlotRowCmd::Pick(row.slot));
                        }
                    }
                }
                ui.end_row();
            }
        });
    cmd
}

/// State backing the equipment picker dialog
#[derive(Default)]
pub struct PickerState {
    pub open_for: Option<EquipmentSlot>,
    pub search: String,
}

impl PickerState {
    pub fn open(&mut self, slot: EquipmentSlot) {
        self.open_for = Some(slot);
        self.search.clear();
    }
}

/// Modal listing the catalog filtered to one slot. `current_id` marks an
/// already-assigned piece as selected instead of selectable; ids in
/// `excluded` are hidden entirely. Returns the picked equipment and
/// closes itself on pick or cancel.
pub fn equipment_picker(
    ctx: &egui::Context,
    picker: &mut PickerState,
    catalog: &[Equipment],
    current_id: Option<i64>,
    excluded: &[i64],
) -> Option<Equipment> {
    let slot = picker.open_for?;
    let mut picked = None;
    let mut close = false;

    egui::Window::new(format!("Select {}", slot.display_name()))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_min_width(520.0);

            ui.horizontal(|ui| {
                ui.label("Search:");
                ui.text_edit_singleline(&mut picker.search);
            });
            ui.add_space(8.0);

            let needle = picker.search.trim().to_lowercase();
            let mut shown = 0;
            egui::ScrollArea::vertical().max_height(380.0).show(ui, |ui| {
                for equipment in catalog.iter().filter(|e| e.slot == slot) {
                    if excluded.contains(&equipment.id) {
                        continue;
                    }
                    if !needle.is_empty() && !equipment.name.to_lowercase().contains(&needle) {
                        continue;
                    }
                    shown += 1;

                    ui.horizontal(|ui| {
                        ui.label(&equipment.name);
                        tier_label(ui, equipment.item_level);
                        ui.label(
                            egui::RichText::new(equipment.equipment_type.display_name()).weak(),
                        );
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                if current_id == Some(equipment.id) {
                                    ui.label(egui::RichText::new("Selected").weak());
                                } else if ui.button("Select").clicked() {
                                    picked = Some(equipment.clone());
                                }
                            },
                        );
                    });
                }
                if shown == 0 {
                    ui.label(egui::RichText::new("No equipment for this slot").weak());
                }
            });

            ui.add_space(8.0);
            if ui.button("Cancel").clicked() {
                close = true;
            }
        });

    if picked.is_some() || close {
        picker.open_for = None;
        picker.search.clear();
    }
    picked
}
