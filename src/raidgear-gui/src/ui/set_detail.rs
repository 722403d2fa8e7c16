//! Set detail: per-slot items, obtained tracking, and set deletion.
//!
//! Every mutation is followed by a full refetch of the set; the page
//! never patches its local copy.

use eframe::egui;
use raidgear::{
    Equipment, EquipmentQuery, EquipmentSet, EquipmentSlot, SetItemCreate, SetItemUpdate,
};
use raidgear_api::ApiResult;

use crate::app::{GearApp, Page, Phase};
use crate::jobs::{Job, Outcome};
use crate::ui::widgets;

type LoadResult = ApiResult<(EquipmentSet, Vec<Equipment>)>;

#[derive(Default)]
pub struct SetDetailState {
    pub set_id: i64,
    pub phase: Phase,
    pub set: Option<EquipmentSet>,
    pub catalog: Vec<Equipment>,
    pub picker: widgets::PickerState,
    pub confirm_delete: bool,
    load_job: Option<Job<LoadResult>>,
    action_job: Option<Job<Outcome>>,
    delete_job: Option<Job<Outcome>>,
}

impl SetDetailState {
    pub fn for_set(set_id: i64) -> Self {
        Self {
            set_id,
            ..Default::default()
        }
    }
}

enum ItemAction {
    Toggle { item_id: i64, obtained: bool },
    Add(EquipmentSlot),
    Remove(i64),
}

pub fn show(ui: &mut egui::Ui, app: &mut GearApp) {
    poll(app);
    if !matches!(app.page, Page::SetDetail(_)) {
        return;
    }

    if app.set_detail.load_job.is_some()
        || app.set_detail.action_job.is_some()
        || app.set_detail.delete_job.is_some()
    {
        ui.ctx()
            .request_repaint_after(std::time::Duration::from_millis(100));
    }

    match app.set_detail.phase.clone() {
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

    let Some(set) = app.set_detail.set.clone() else {
        return;
    };

    let busy = app.set_detail.phase.is_busy();
    let mut back_clicked = false;
    let mut edit_clicked = false;
    let mut ask_delete = false;
    let mut action: Option<ItemAction> = None;

    ui.horizontal(|ui| {
        if ui.button("← Sets").clicked() {
            back_clicked = true;
        }
        ui.heading(&set.name);
        widgets::kind_badge(ui, set.kind());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .button(
                    egui::RichText::new("Delete").color(egui::Color32::from_rgb(255, 120, 120)),
                )
                .clicked()
            {
                ask_delete = true;
            }
            if ui.button("Edit").clicked() {
                edit_clicked = true;
            }
        });
    });
    ui.add_space(6.0);

    ui.horizontal(|ui| {
        ui.label("Average item level:");
        widgets::tier_label(ui, set.total_item_level.round() as i32);
        ui.add_space(16.0);
        widgets::progress_bar(ui, set.obtained_count(), set.items().len());
    });
    ui.add_space(10.0);

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.add_enabled_ui(!busy, |ui| {
            egui::Grid::new("set_items_grid")
                .num_columns(4)
                .spacing([20.0, 8.0])
                .striped(true)
                .show(ui, |ui| {
                    for &slot in EquipmentSlot::ALL {
                        match set.items().iter().find(|item| item.slot == slot) {
                            Some(item) => {
                                let mut obtained = item.is_obtained;
                                if ui
                                    .checkbox(&mut obtained, "")
                                    .on_hover_text("Obtained")
                                    .changed()
                                {
                                    action = Some(ItemAction::Toggle {
                                        item_id: item.id,
                                        obtained,
                                    });
                                }
                                ui.label(egui::RichText::new(slot.display_name()).strong());
                                ui.horizontal(|ui| {
                                    match &item.equipment {
                                        Some(equipment) => {
                                            ui.label(&equipment.name);
                                            widgets::tier_label(ui, equipment.item_level);
                                            ui.label(
                                                egui::RichText::new(
                                                    equipment.equipment_type.display_name(),
                                                )
                                                .weak(),
                                            );
                                        }
                                        None => {
                                            ui.label(format!("Equipment {}", item.equipment_id));
                                        }
                                    }
                                    if let Some(when) = &item.obtained_at {
                                        let date = when.split('T').next().unwrap_or(when);
                                        ui.label(
                                            egui::RichText::new(format!("obtained {}", date))
                                                .weak()
                                                .small(),
                                        );
                                    }
                                });
                                if ui.button("Remove").clicked() {
                                    action = Some(ItemAction::Remove(item.id));
                                }
                            }
                            None => {
                                ui.label("");
                                ui.label(egui::RichText::new(slot.display_name()).strong());
                                ui.label(egui::RichText::new("Empty").weak());
                                if ui.button("Add").clicked() {
                                    action = Some(ItemAction::Add(slot));
                                }
                            }
                        }
                        ui.end_row();
                    }
                });
        });
    });

    // Picker for adding to an empty slot; equipment already in the set
    // stays out of the list
    let excluded: Vec<i64> = set.items().iter().map(|item| item.equipment_id).collect();
    if let Some(picked) = widgets::equipment_picker(
        ui.ctx(),
        &mut app.set_detail.picker,
        &app.set_detail.catalog,
        None,
        &excluded,
    ) {
        start_add(app, picked.id, picked.slot);
    }

    if app.set_detail.confirm_delete {
        let mut proceed = false;
        let mut cancel = false;
        egui::Window::new("Delete Set")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ui.ctx(), |ui| {
                ui.set_min_width(360.0);
                ui.label(format!("Delete \"{}\"? This cannot be undone.", set.name));
                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    if ui
                        .button(
                            egui::RichText::new("Delete")
                                .color(egui::Color32::from_rgb(255, 120, 120)),
                        )
                        .clicked()
                    {
                        proceed = true;
                    }
                    if ui.button("Cancel").clicked() {
                        cancel = true;
                    }
                });
            });
        if proceed {
            app.set_detail.confirm_delete = false;
            start_delete(app);
        }
        if cancel {
            app.set_detail.confirm_delete = false;
        }
    }

    if back_clicked {
        app.navigate(Page::SetList);
        return;
    }
    if edit_clicked {
        app.navigate(Page::SetEdit(app.set_detail.set_id));
        return;
    }
    if ask_delete {
        app.set_detail.confirm_delete = true;
    }

    match action {
        Some(ItemAction::Toggle { item_id, obtained }) => start_toggle(app, item_id, obtained),
        Some(ItemAction::Add(slot)) => app.set_detail.picker.open(slot),
        Some(ItemAction::Remove(item_id)) => start_remove(app, item_id),
        None => {}
    }
}

fn poll(app: &mut GearApp) {
    if let Some(result) = Job::take(&mut app.set_detail.load_job) {
        match result {
            Ok((set, catalog)) => {
                app.set_detail.set = Some(set);
                app.set_detail.catalog = catalog;
                app.set_detail.phase = Phase::Ready;
            }
            Err(e) if e.is_not_found() => {
                app.set_error(e.to_string());
                app.navigate(Page::SetList);
                return;
            }
            Err(e) => app.set_detail.phase = Phase::Failed(e.to_string()),
        }
    }

    if let Some(outcome) = Job::take(&mut app.set_detail.action_job) {
        match outcome {
            Outcome::Done(msg) => app.set_status(msg),
            Outcome::Partial(msg) | Outcome::Rejected(msg) => app.set_error(msg),
        }
        reload(app);
    }

    if let Some(outcome) = Job::take(&mut app.set_detail.delete_job) {
        match outcome {
            Outcome::Done(msg) => {
                app.set_status(msg);
                app.navigate(Page::SetList);
                return;
            }
            Outcome::Partial(msg) | Outcome::Rejected(msg) => {
                app.set_detail.phase = Phase::Ready;
                app.set_error(msg);
            }
        }
    }

    if app.set_detail.phase == Phase::Loading && app.set_detail.load_job.is_none() {
        reload(app);
    }
}

fn reload(app: &mut GearApp) {
    let service = app.services.equipment.clone();
    let set_id = app.set_detail.set_id;
    app.set_detail.phase = Phase::Loading;
    app.set_detail.load_job = Some(Job::spawn(move || {
        let set = service.get_set(set_id)?;
        let catalog = service.list(&EquipmentQuery::default())?;
        Ok((set, catalog))
    }));
}

fn start_toggle(app: &mut GearApp, item_id: i64, obtained: bool) {
    let service = app.services.equipment.clone();
    let set_id = app.set_detail.set_id;
    app.set_detail.phase = Phase::Submitting;
    app.set_detail.action_job = Some(Job::spawn(move || {
        let update = SetItemUpdate {
            is_obtained: Some(obtained),
            ..Default::default()
        };
        match service.update_set_item(set_id, item_id, &update) {
            Ok(_) => Outcome::Done(
                if obtained {
                    "Marked obtained"
                } else {
                    "Marked not obtained"
                }
                .to_string(),
            ),
            Err(e) => Outcome::Rejected(format!("Failed to update item: {}", e)),
        }
    }));
}

fn start_add(app: &mut GearApp, equipment_id: i64, slot: EquipmentSlot) {
    let service = app.services.equipment.clone();
    let set_id = app.set_detail.set_id;
    app.set_detail.phase = Phase::Submitting;
    app.set_detail.action_job = Some(Job::spawn(move || {
        let create = SetItemCreate { equipment_id, slot };
        match service.add_set_item(set_id, &create) {
            Ok(_) => Outcome::Done(format!("Added to {}", slot.display_name())),
            Err(e) => Outcome::Rejected(format!("Failed to add item: {}", e)),
        }
    }));
}

fn start_remove(app: &mut GearApp, item_id: i64) {
    let service = app.services.equipment.clone();
    let set_id = app.set_detail.set_id;
    app.set_detail.phase = Phase::Submitting;
    app.set_detail.action_job = Some(Job::spawn(
        move || match service.remove_set_item(set_id, item_id) {
            Ok(ack) => Outcome::Done(ack.message),
            Err(e) => Outcome::Rejected(format!("Failed to remove item: {}", e)),
        },
    ));
}

fn start_delete(app: &mut GearApp) {
    let service = app.services.equipment.clone();
    let set_id = app.set_detail.set_id;
    app.set_detail.phase = Phase::Submitting;
    app.set_detail.delete_job = Some(Job::spawn(move || match service.delete_set(set_id) {
        Ok(ack) => Outcome::Done(ack.message),
        Err(e) => Outcome::Rejected(format!("Failed to delete set: {}", e)),
    }));
}
