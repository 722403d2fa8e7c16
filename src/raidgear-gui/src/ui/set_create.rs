//! Set creation: name, group, purpose, and one assignment row per slot.

use eframe::egui;
use raidgear::{Equipment, EquipmentQuery, RaidGroup};
use raidgear_api::ApiResult;

use crate::app::{GearApp, Page, Phase};
use crate::jobs::{Job, Outcome};
use crate::ui::widgets;

type LoadResult = ApiResult<(Vec<RaidGroup>, Vec<Equipment>)>;

#[derive(Default)]
pub struct SetCreateState {
    pub phase: Phase,
    pub form: raidgear::SetForm,
    pub errors: raidgear::SetFormErrors,
    pub groups: Vec<RaidGroup>,
    pub catalog: Vec<Equipment>,
    pub picker: widgets::PickerState,
    load_job: Option<Job<LoadResult>>,
    submit_job: Option<Job<Outcome>>,
}

pub fn show(ui: &mut egui::Ui, app: &mut GearApp) {
    poll(app);
    if app.page != Page::SetCreate {
        return;
    }

    if app.set_create.load_job.is_some() || app.set_create.submit_job.is_some() {
        ui.ctx()
            .request_repaint_after(std::time::Duration::from_millis(100));
    }

    match app.set_create.phase.clone() {
        Phase::Loading => {
            widgets::loading_note(ui, "groups and equipment");
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

    let busy = app.set_create.phase.is_busy();
    let mut cancel_clicked = false;
    let mut submit_clicked = false;

    ui.horizontal(|ui| {
        ui.heading("New Equipment Set");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Back to sets").clicked() {
                cancel_clicked = true;
            }
        });
    });
    ui.add_space(10.0);

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.add_enabled_ui(!busy, |ui| {
            egui::Grid::new("set_form_grid")
                .num_columns(2)
                .spacing([24.0, 10.0])
                .show(ui, |ui| {
                    ui.label("Name:");
                    ui.add_sized(
                        [280.0, 24.0],
                        egui::TextEdit::singleline(&mut app.set_create.form.name),
                    );
                    ui.end_row();
                    if let Some(err) = app.set_create.errors.name.clone() {
                        ui.label("");
                        widgets::field_error(ui, &err);
                        ui.end_row();
                    }

                    ui.label("Raid group:");
                    let selected = app
                        .set_create
                        .form
                        .raid_group_id
                        .and_then(|id| app.set_create.groups.iter().find(|g| g.id == id))
                        .map(|g| g.name.clone())
                        .unwrap_or_else(|| "Select a group".to_string());
                    let mut choice = app.set_create.form.raid_group_id;
                    egui::ComboBox::from_id_salt("set_raid_group")
                        .selected_text(selected)
                        .show_ui(ui, |ui| {
                            for group in &app.set_create.groups {
                                ui.selectable_value(&mut choice, Some(group.id), &group.name);
                            }
                        });
                    app.set_create.form.raid_group_id = choice;
                    ui.end_row();
                    if let Some(err) = app.set_create.errors.raid_group.clone() {
                        ui.label("");
                        widgets::field_error(ui, &err);
                        ui.end_row();
                    }

                    ui.label("Purpose:");
                    widgets::kind_toggle(ui, &mut app.set_create.form.kind);
                    ui.end_row();
                });

            ui.add_space(14.0);
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("Slots").size(17.0).strong());
                ui.add_space(12.0);
                let average = app.set_create.form.average_item_level();
                if average > 0 {
                    ui.label("Average:");
                    widgets::tier_label(ui, average);
                }
                ui.label(
                    egui::RichText::new(format!(
                        "{} of {} slots assigned",
                        app.set_create.form.assigned_count(),
                        app.set_create.form.rows.len()
                    ))
                    .weak(),
                );
            });
            if let Some(err) = app.set_create.errors.equipment.clone() {
                widgets::field_error(ui, &err);
            }
            ui.add_space(4.0);

            if let Some(cmd) = widgets::slot_assignment_rows(ui, &app.set_create.form) {
                match cmd {
                    widgets::SlotRowCmd::Pick(slot) => app.set_create.picker.open(slot),
                    widgets::SlotRowCmd::Clear(slot) => app.set_create.form.clear(slot),
                }
            }
        });

        ui.add_space(16.0);
        ui.horizontal(|ui| {
            if ui
                .add_enabled(!busy, egui::Button::new("Create Set"))
                .clicked()
            {
                submit_clicked = true;
            }
            if app.set_create.phase == Phase::Submitting {
                ui.spinner();
                ui.label(egui::RichText::new("Creating set...").weak());
            }
        });
    });

    let current_id = app
        .set_create
        .picker
        .open_for
        .and_then(|slot| app.set_create.form.assignment(slot))
        .map(|e| e.id);
    if let Some(picked) = widgets::equipment_picker(
        ui.ctx(),
        &mut app.set_create.picker,
        &app.set_create.catalog,
        current_id,
        &[],
    ) {
        app.set_create.form.assign(picked.slot, picked);
    }

    if cancel_clicked {
        app.navigate(Page::SetList);
        return;
    }

    // Validation runs before any request is issued; an invalid form
    // renders its field errors and nothing leaves the client.
    if submit_clicked {
        app.set_create.errors = app.set_create.form.validate(true);
        if app.set_create.errors.is_empty() {
            start_submit(app);
        }
    }
}

fn poll(app: &mut GearApp) {
    if let Some(result) = Job::take(&mut app.set_create.load_job) {
        match result {
            Ok((groups, catalog)) => {
                app.set_create.groups = groups;
                app.set_create.catalog = catalog;
                app.set_create.phase = Phase::Ready;
            }
            Err(e) => app.set_create.phase = Phase::Failed(e.to_string()),
        }
    }

    if let Some(outcome) = Job::take(&mut app.set_create.submit_job) {
        match outcome {
            Outcome::Done(msg) => {
                app.set_status(msg);
                app.navigate(Page::SetList);
                return;
            }
            Outcome::Partial(msg) => {
                // The set exists with only part of its items; send the user
                // to the dashboard to reconcile
                app.set_error(msg);
                app.navigate(Page::SetList);
                return;
            }
            Outcome::Rejected(msg) => {
                app.set_create.phase = Phase::Ready;
                app.set_error(msg);
            }
        }
    }

    if app.set_create.phase == Phase::Loading && app.set_create.load_job.is_none() {
        reload(app);
    }
}

fn reload(app: &mut GearApp) {
    let equipment = app.services.equipment.clone();
    let raids = app.services.raids.clone();
    app.set_create.phase = Phase::Loading;
    app.set_create.load_job = Some(Job::spawn(move || {
        let groups = raids.my_groups()?;
        let catalog = equipment.list(&EquipmentQuery::default())?;
        Ok((groups, catalog))
    }));
}

/// Create the set, then add the assigned items one at a time in slot
/// order. Item adds after a failure are skipped; the set itself stays.
fn start_submit(app: &mut GearApp) {
    let Some(create) = app.set_create.form.to_create() else {
        return;
    };
    let items = app.set_create.form.item_creates();
    let service = app.services.equipment.clone();
    app.set_create.phase = Phase::Submitting;
    app.set_create.submit_job = Some(Job::spawn(move || {
        let total = items.len();
        let set = match service.create_set(&create) {
            Ok(set) => set,
            Err(e) => return Outcome::Rejected(format!("Failed to create set: {}", e)),
        };
        for (index, item) in items.iter().enumerate() {
            if let Err(e) = service.add_set_item(set.id, item) {
                return Outcome::Partial(format!(
                    "Set \"{}\" was created, but adding item {} of {} failed: {}",
                    set.name,
                    index + 1,
                    total,
                    e
                ));
            }
        }
        Outcome::Done(format!("Created set \"{}\"", set.name))
    }));
}
