//! Equipment catalog: the full item list with client-side filtering.
//!
//! The page fetches the catalog once and filters in memory. Level
//! bounds are typed as text and parsed per frame; unparsable text is
//! treated as no bound.

use eframe::egui;
use egui_extras::{Column, TableBuilder};
use raidgear::{Equipment, EquipmentListFilter, EquipmentQuery, EquipmentSlot, EquipmentType};
use raidgear_api::ApiResult;

use crate::app::{GearApp, Page, Phase};
use crate::jobs::Job;
use crate::ui::widgets;

#[derive(Default)]
pub struct EquipmentListState {
    pub phase: Phase,
    pub items: Vec<Equipment>,
    pub filter: EquipmentListFilter,
    pub min_level_text: String,
    pub max_level_text: String,
    load_job: Option<Job<ApiResult<Vec<Equipment>>>>,
}

pub fn show(ui: &mut egui::Ui, app: &mut GearApp) {
    poll(app);

    if app.equipment_list.load_job.is_some() {
        ui.ctx()
            .request_repaint_after(std::time::Duration::from_millis(100));
    }

    match app.equipment_list.phase.clone() {
        Phase::Loading => {
            widgets::loading_note(ui, "equipment");
            return;
        }
        Phase::Failed(message) => {
            if widgets::load_failed(ui, &message) {
                reload(app);
            }
            return;
        }
        Phase::Ready | Phase::Submitting => {}
    }

    let mut create_clicked = false;
    let mut clear_clicked = false;

    ui.horizontal(|ui| {
        ui.heading("Equipment");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("➕ Add Equipment").clicked() {
                create_clicked = true;
            }
        });
    });
    ui.add_space(8.0);

    let state = &mut app.equipment_list;
    ui.horizontal(|ui| {
        ui.add_sized(
            [220.0, 26.0],
            egui::TextEdit::singleline(&mut state.filter.search)
                .hint_text("Search name or source"),
        );
        egui::ComboBox::from_id_salt("filter_slot")
            .selected_text(
                state
                    .filter
                    .slot
                    .map(|slot| slot.display_name())
                    .unwrap_or("Any slot"),
            )
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut state.filter.slot, None, "Any slot");
                for &slot in EquipmentSlot::ALL {
                    ui.selectable_value(&mut state.filter.slot, Some(slot), slot.display_name());
                }
            });
        egui::ComboBox::from_id_salt("filter_type")
            .selected_text(
                state
                    .filter
                    .equipment_type
                    .map(|ty| ty.display_name())
                    .unwrap_or("Any type"),
            )
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut state.filter.equipment_type, None, "Any type");
                for &ty in EquipmentType::ALL {
                    ui.selectable_value(
                        &mut state.filter.equipment_type,
                        Some(ty),
                        ty.display_name(),
                    );
                }
            });
        ui.label("IL");
        ui.add_sized(
            [60.0, 26.0],
            egui::TextEdit::singleline(&mut state.min_level_text).hint_text("min"),
        );
        ui.label("to");
        ui.add_sized(
            [60.0, 26.0],
            egui::TextEdit::singleline(&mut state.max_level_text).hint_text("max"),
        );
        if ui.button("Clear").clicked() {
            clear_clicked = true;
        }
    });
    ui.add_space(8.0);

    let mut effective = state.filter.clone();
    effective.min_level = state.min_level_text.trim().parse().ok();
    effective.max_level = state.max_level_text.trim().parse().ok();
    let visible = effective.apply(&state.items);

    ui.label(
        egui::RichText::new(format!("{} of {} items", visible.len(), state.items.len())).weak(),
    );
    ui.add_space(6.0);

    if state.items.is_empty() {
        widgets::empty_note(
            ui,
            "🛡",
            "No Equipment",
            "Add equipment to start building sets.",
        );
    } else if visible.is_empty() {
        ui.add_space(20.0);
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new("No equipment matches the filters.").weak());
        });
    } else {
        TableBuilder::new(ui)
            .striped(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::remainder())
            .column(Column::auto())
            .column(Column::auto())
            .column(Column::auto())
            .column(Column::remainder())
            .column(Column::auto())
            .header(24.0, |mut header| {
                header.col(|ui| {
                    ui.strong("Name");
                });
                header.col(|ui| {
                    ui.strong("Slot");
                });
                header.col(|ui| {
                    ui.strong("Type");
                });
                header.col(|ui| {
                    ui.strong("IL");
                });
                header.col(|ui| {
                    ui.strong("Source");
                });
                header.col(|ui| {
                    ui.strong("Job");
                });
            })
            .body(|mut body| {
                for equipment in &visible {
                    body.row(26.0, |mut row| {
                        row.col(|ui| {
                            ui.label(&equipment.name);
                        });
                        row.col(|ui| {
                            ui.label(equipment.slot.display_name());
                        });
                        row.col(|ui| {
                            ui.label(equipment.equipment_type.display_name());
                        });
                        row.col(|ui| {
                            widgets::tier_label(ui, equipment.item_level);
                        });
                        row.col(|ui| {
                            ui.label(equipment.source.as_deref().unwrap_or("-"));
                        });
                        row.col(|ui| {
                            ui.label(equipment.job_category.as_deref().unwrap_or("-"));
                        });
                    });
                }
            });
    }

    if create_clicked {
        app.navigate(Page::EquipmentCreate);
        return;
    }
    if clear_clicked {
        app.equipment_list.filter = EquipmentListFilter::default();
        app.equipment_list.min_level_text.clear();
        app.equipment_list.max_level_text.clear();
    }
}

fn poll(app: &mut GearApp) {
    if let Some(result) = Job::take(&mut app.equipment_list.load_job) {
        match result {
            Ok(items) => {
                app.equipment_list.items = items;
                app.equipment_list.phase = Phase::Ready;
            }
            Err(e) => app.equipment_list.phase = Phase::Failed(e.to_string()),
        }
    }

    if app.equipment_list.phase == Phase::Loading && app.equipment_list.load_job.is_none() {
        reload(app);
    }
}

fn reload(app: &mut GearApp) {
    let service = app.services.equipment.clone();
    app.equipment_list.phase = Phase::Loading;
    app.equipment_list.load_job =
        Some(Job::spawn(move || service.list(&EquipmentQuery::default())));
}
