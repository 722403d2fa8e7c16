//! Add a piece of equipment to the shared catalog.
//!
//! The raid dropdown and tome cost field only appear for types that
//! use them; switching type away clears the hidden values.

use eframe::egui;
use raidgear::{EquipmentForm, EquipmentFormErrors, EquipmentSlot, EquipmentType, Raid};
use raidgear_api::ApiResult;

use crate::app::{GearApp, Page, Phase};
use crate::jobs::Job;
use crate::ui::widgets;

#[derive(Default)]
pub struct EquipmentCreateState {
    pub phase: Phase,
    pub form: EquipmentForm,
    pub errors: EquipmentFormErrors,
    pub raids: Vec<Raid>,
    load_job: Option<Job<ApiResult<Vec<Raid>>>>,
    submit_job: Option<Job<ApiResult<raidgear::Equipment>>>,
}

pub fn show(ui: &mut egui::Ui, app: &mut GearApp) {
    poll(app);
    if app.page != Page::EquipmentCreate {
        return;
    }

    if app.equipment_create.load_job.is_some() || app.equipment_create.submit_job.is_some() {
        ui.ctx()
            .request_repaint_after(std::time::Duration::from_millis(100));
    }

    match app.equipment_create.phase.clone() {
        Phase::Loading => {
            widgets::loading_note(ui, "raids");
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

    let busy = app.equipment_create.phase.is_busy();
    let mut create_clicked = false;
    let mut cancel_clicked = false;

    ui.horizontal(|ui| {
        ui.heading("Add Equipment");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Back to equipment").clicked() {
                cancel_clicked = true;
            }
        });
    });
    ui.add_space(10.0);

    egui::ScrollArea::vertical().show(ui, |ui| {
        let state = &mut app.equipment_create;
        ui.add_enabled_ui(!busy, |ui| {
            egui::Grid::new("equipment_form_grid")
                .num_columns(2)
                .spacing([40.0, 12.0])
                .show(ui, |ui| {
                    ui.label("Name:");
                    ui.add_sized(
                        [320.0, 26.0],
                        egui::TextEdit::singleline(&mut state.form.name),
                    );
                    ui.end_row();
                    if let Some(error) = &state.errors.name {
                        ui.label("");
                        widgets::field_error(ui, error);
                        ui.end_row();
                    }

                    ui.label("Slot:");
                    egui::ComboBox::from_id_salt("equipment_slot")
                        .selected_text(state.form.slot.display_name())
                        .show_ui(ui, |ui| {
                            for &slot in EquipmentSlot::ALL {
                                ui.selectable_value(&mut state.form.slot, slot, slot.display_name());
                            }
                        });
                    ui.end_row();

                    // Type switches route through the form so fields the
                    // new type has no use for get cleared
                    ui.label("Type:");
                    let mut type_choice = state.form.equipment_type;
                    egui::ComboBox::from_id_salt("equipment_type")
                        .selected_text(type_choice.display_name())
                        .show_ui(ui, |ui| {
                            for &ty in EquipmentType::ALL {
                                ui.selectable_value(&mut type_choice, ty, ty.display_name());
                            }
                        });
                    if type_choice != state.form.equipment_type {
                        state.form.set_equipment_type(type_choice);
                    }
                    ui.end_row();

                    ui.label("Item level:");
                    ui.horizontal(|ui| {
                        ui.add(egui::DragValue::new(&mut state.form.item_level).range(1..=999));
                        widgets::tier_label(ui, state.form.item_level);
                    });
                    ui.end_row();
                    if let Some(error) = &state.errors.item_level {
                        ui.label("");
                        widgets::field_error(ui, error);
                        ui.end_row();
                    }

                    if state.form.equipment_type.is_raid_sourced() {
                        ui.label("Raid:");
                        let selected = state
                            .form
                            .raid_id
                            .and_then(|id| state.raids.iter().find(|raid| raid.id == id))
                            .map(|raid| raid.name.clone())
                            .unwrap_or_else(|| "None".to_string());
                        let mut choice = state.form.raid_id;
                        egui::ComboBox::from_id_salt("equipment_raid")
                            .selected_text(selected)
                            .show_ui(ui, |ui| {
                                ui.selectable_value(&mut choice, None, "None");
                                for raid in &state.raids {
                                    ui.selectable_value(&mut choice, Some(raid.id), &raid.name);
                                }
                            });
                        state.form.raid_id = choice;
                        ui.end_row();
                    }

                    if state.form.equipment_type.is_tome_sourced() {
                        ui.label("Tome cost:");
                        ui.add(egui::DragValue::new(&mut state.form.tome_cost).range(0..=9999));
                        ui.end_row();
                        if let Some(error) = &state.errors.tome_cost {
                            ui.label("");
                            widgets::field_error(ui, error);
                            ui.end_row();
                        }
                    }

                    ui.label("Job category:");
                    ui.add_sized(
                        [320.0, 26.0],
                        egui::TextEdit::singleline(&mut state.form.job_category)
                            .hint_text("e.g. Tanks"),
                    );
                    ui.end_row();

                    ui.label("Source:");
                    ui.add_sized(
                        [320.0, 26.0],
                        egui::TextEdit::singleline(&mut state.form.source)
                            .hint_text("Where it drops"),
                    );
                    ui.end_row();
                });
        });

        ui.add_space(16.0);
        ui.horizontal(|ui| {
            if ui
                .add_enabled(!busy, egui::Button::new("Create Equipment"))
                .clicked()
            {
                create_clicked = true;
            }
            if state.phase == Phase::Submitting {
                ui.spinner();
                ui.label(egui::RichText::new("Creating equipment...").weak());
            }
        });
    });

    if cancel_clicked {
        app.navigate(Page::EquipmentList);
        return;
    }
    if create_clicked {
        app.equipment_create.errors = app.equipment_create.form.validate();
        if app.equipment_create.errors.is_empty() {
            start_submit(app);
        }
    }
}

fn poll(app: &mut GearApp) {
    if let Some(result) = Job::take(&mut app.equipment_create.load_job) {
        match result {
            Ok(raids) => {
                app.equipment_create.raids = raids;
                app.equipment_create.phase = Phase::Ready;
            }
            Err(e) => app.equipment_create.phase = Phase::Failed(e.to_string()),
        }
    }

    if let Some(result) = Job::take(&mut app.equipment_create.submit_job) {
        match result {
            Ok(created) => {
                app.set_status(format!("Created \"{}\"", created.name));
                app.navigate(Page::EquipmentList);
                return;
            }
            Err(e) => {
                app.equipment_create.phase = Phase::Ready;
                app.set_error(format!("Failed to create equipment: {}", e));
            }
        }
    }

    if app.equipment_create.phase == Phase::Loading && app.equipment_create.load_job.is_none() {
        reload(app);
    }
}

fn reload(app: &mut GearApp) {
    let service = app.services.raids.clone();
    app.equipment_create.phase = Phase::Loading;
    app.equipment_create.load_job = Some(Job::spawn(move || service.raids(None)));
}

fn start_submit(app: &mut GearApp) {
    let service = app.services.equipment.clone();
    let payload = app.equipment_create.form.to_create();
    app.equipment_create.phase = Phase::Submitting;
    app.equipment_create.submit_job = Some(Job::spawn(move || service.create(&payload)));
}
