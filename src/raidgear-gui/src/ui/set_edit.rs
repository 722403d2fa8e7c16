//! Edit an existing set: rename, retag, and reassign slots.
//!
//! The page keeps a snapshot of the items as loaded. On save it sends
//! the set update first, then the per-slot diff against that snapshot,
//! one request per changed slot. The raid group is fixed after
//! creation and shown read-only here.

use eframe::egui;
use raidgear::{
    diff_assignments, Equipment, EquipmentQuery, EquipmentSet, EquipmentSetItem, RaidGroup,
    SetForm, SetFormErrors, SetItemCreate, SetItemUpdate, SlotEdit,
};
use raidgear_api::ApiResult;

use crate::app::{GearApp, Page, Phase};
use crate::jobs::{Job, Outcome};
use crate::ui::widgets;

type LoadResult = ApiResult<(EquipmentSet, Vec<Equipment>, Vec<RaidGroup>)>;

#[derive(Default)]
pub struct SetEditState {
    pub set_id: i64,
    pub phase: Phase,
    pub form: SetForm,
    pub errors: SetFormErrors,
    /// Items as the server last reported them, for the save diff
    pub snapshot: Vec<EquipmentSetItem>,
    pub group_name: Option<String>,
    pub catalog: Vec<Equipment>,
    pub picker: widgets::PickerState,
    load_job: Option<Job<LoadResult>>,
    save_job: Option<Job<Outcome>>,
}

impl SetEditState {
    pub fn for_set(set_id: i64) -> Self {
        Self {
            set_id,
            ..Default::default()
        }
    }
}

pub fn show(ui: &mut egui::Ui, app: &mut GearApp) {
    poll(app);
    if !matches!(app.page, Page::SetEdit(_)) {
        return;
    }

    if app.set_edit.load_job.is_some() || app.set_edit.save_job.is_some() {
        ui.ctx()
            .request_repaint_after(std::time::Duration::from_millis(100));
    }

    match app.set_edit.phase.clone() {
        Phase::Loading => {
            widgets::loading_note(ui, "the set");
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

    let busy = app.set_edit.phase.is_busy();
    let mut save_clicked = false;
    let mut cancel_clicked = false;
    let mut row_cmd: Option<widgets::SlotRowCmd> = None;

    ui.horizontal(|ui| {
        ui.heading("Edit Set");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Cancel").clicked() {
                cancel_clicked = true;
            }
        });
    });
    ui.add_space(10.0);

    egui::ScrollArea::vertical().show(ui, |ui| {
        let state = &mut app.set_edit;
        ui.add_enabled_ui(!busy, |ui| {
            egui::Grid::new("set_form_grid")
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

                    ui.label("Raid group:");
                    match &state.group_name {
                        Some(name) => ui.label(name),
                        None => ui.label(
                            egui::RichText::new(format!("Group {}", state.form.raid_group_id.unwrap_or(0)))
                                .weak(),
                        ),
                    };
                    ui.end_row();

                    ui.label("Purpose:");
                    widgets::kind_toggle(ui, &mut state.form.kind);
                    ui.end_row();
                });

            ui.add_space(16.0);
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("Slots").strong().size(17.0));
                let average = state.form.average_item_level();
                if average > 0 {
                    ui.label("Average:");
                    widgets::tier_label(ui, average);
                }
                ui.label(
                    egui::RichText::new(format!(
                        "{} of {} slots assigned",
                        state.form.assigned_count(),
                        state.form.rows.len()
                    ))
                    .weak(),
                );
            });
            if let Some(error) = &state.errors.equipment {
                widgets::field_error(ui, error);
            }
            ui.add_space(6.0);

            row_cmd = widgets::slot_assignment_rows(ui, &state.form);
        });

        ui.add_space(16.0);
        ui.horizontal(|ui| {
            if ui
                .add_enabled(!busy, egui::Button::new("Save Changes"))
                .clicked()
            {
                save_clicked = true;
            }
            if state.phase == Phase::Submitting {
                ui.spinner();
                ui.label(egui::RichText::new("Saving changes...").weak());
            }
        });
    });

    match row_cmd {
        Some(widgets::SlotRowCmd::Pick(slot)) => app.set_edit.picker.open(slot),
        Some(widgets::SlotRowCmd::Clear(slot)) => app.set_edit.form.clear(slot),
        None => {}
    }

    let current_id = app
        .set_edit
        .picker
        .open_for
        .and_then(|slot| app.set_edit.form.assignment(slot))
        .map(|equipment| equipment.id);
    if let Some(picked) = widgets::equipment_picker(
        ui.ctx(),
        &mut app.set_edit.picker,
        &app.set_edit.catalog,
        current_id,
        &[],
    ) {
        app.set_edit.form.assign(picked.slot, picked);
    }

    if cancel_clicked {
        app.navigate(Page::SetDetail(app.set_edit.set_id));
        return;
    }
    if save_clicked {
        app.set_edit.errors = app.set_edit.form.validate(false);
        if app.set_edit.errors.is_empty() {
            start_save(app);
        }
    }
}

fn poll(app: &mut GearApp) {
    if let Some(result) = Job::take(&mut app.set_edit.load_job) {
        match result {
            Ok((set, catalog, groups)) => {
                app.set_edit.form = SetForm::from_set(&set);
                app.set_edit.snapshot = set.items().to_vec();
                app.set_edit.group_name = groups
                    .iter()
                    .find(|group| group.id == set.raid_group_id)
                    .map(|group| group.name.clone());
                app.set_edit.catalog = catalog;
                app.set_edit.phase = Phase::Ready;
            }
            Err(e) if e.is_not_found() => {
                app.set_error(e.to_string());
                app.navigate(Page::SetList);
                return;
            }
            Err(e) => app.set_edit.phase = Phase::Failed(e.to_string()),
        }
    }

    if let Some(outcome) = Job::take(&mut app.set_edit.save_job) {
        match outcome {
            Outcome::Done(msg) => {
                app.set_status(msg);
                app.navigate(Page::SetDetail(app.set_edit.set_id));
                return;
            }
            Outcome::Partial(msg) => {
                // Some slot changes landed and some did not; the detail
                // page shows what the server actually holds now
                app.set_error(msg);
                app.navigate(Page::SetDetail(app.set_edit.set_id));
                return;
            }
            Outcome::Rejected(msg) => {
                app.set_edit.phase = Phase::Ready;
                app.set_error(msg);
            }
        }
    }

    if app.set_edit.phase == Phase::Loading && app.set_edit.load_job.is_none() {
        reload(app);
    }
}

fn reload(app: &mut GearApp) {
    let equipment = app.services.equipment.clone();
    let raids = app.services.raids.clone();
    let set_id = app.set_edit.set_id;
    app.set_edit.phase = Phase::Loading;
    app.set_edit.load_job = Some(Job::spawn(move || {
        let set = equipment.get_set(set_id)?;
        let catalog = equipment.list(&EquipmentQuery::default())?;
        let groups = raids.my_groups()?;
        Ok((set, catalog, groups))
    }));
}

/// Send the set update, then walk the slot diff in row order. A failed
/// slot request stops the walk; earlier ones have already committed.
fn start_save(app: &mut GearApp) {
    let service = app.services.equipment.clone();
    let set_id = app.set_edit.set_id;
    let update = app.set_edit.form.to_update();
    let edits = diff_assignments(&app.set_edit.snapshot, &app.set_edit.form.rows);
    app.set_edit.phase = Phase::Submitting;
    app.set_edit.save_job = Some(Job::spawn(move || {
        if let Err(e) = service.update_set(set_id, &update) {
            return Outcome::Rejected(format!("Failed to save set: {}", e));
        }
        let total = edits.len();
        for (index, edit) in edits.iter().enumerate() {
            let applied = match edit {
                SlotEdit::Add { slot, equipment_id } => {
                    let create = SetItemCreate {
                        equipment_id: *equipment_id,
                        slot: *slot,
                    };
                    service.add_set_item(set_id, &create).map(|_| ())
                }
                SlotEdit::Replace {
                    item_id,
                    equipment_id,
                } => {
                    let patch = SetItemUpdate {
                        equipment_id: Some(*equipment_id),
                        ..Default::default()
                    };
                    service.update_set_item(set_id, *item_id, &patch).map(|_| ())
                }
                SlotEdit::Remove { item_id } => {
                    service.remove_set_item(set_id, *item_id).map(|_| ())
                }
            };
            if let Err(e) = applied {
                return Outcome::Partial(format!(
                    "Set saved, but applying slot change {} of {} failed: {}",
                    index + 1,
                    total,
                    e
                ));
            }
        }
        Outcome::Done("Set updated".to_string())
    }));
}
