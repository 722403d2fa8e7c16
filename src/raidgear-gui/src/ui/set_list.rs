//! Sets dashboard: the caller's equipment sets with per-set actions.

use eframe::egui;
use raidgear::{plan_duplicate, EquipmentSet, RaidGroup};
use raidgear_api::ApiResult;

use crate::app::{GearApp, Page, Phase};
use crate::jobs::{Job, Outcome};
use crate::ui::widgets;

type LoadResult = ApiResult<(Vec<EquipmentSet>, Vec<RaidGroup>)>;

#[derive(Default)]
pub struct SetListState {
    pub phase: Phase,
    pub sets: Vec<EquipmentSet>,
    pub groups: Vec<RaidGroup>,
    /// None shows sets across all of the caller's groups
    pub group_filter: Option<i64>,
    pub confirm_delete: Option<i64>,
    load_job: Option<Job<LoadResult>>,
    action_job: Option<Job<Outcome>>,
}

enum RowAction {
    View(i64),
    Edit(i64),
    Duplicate(i64),
    AskDelete(i64),
    CancelDelete,
    ConfirmDelete(i64),
}

pub fn show(ui: &mut egui::Ui, app: &mut GearApp) {
    poll(app);

    if app.set_list.load_job.is_some() || app.set_list.action_job.is_some() {
        ui.ctx()
            .request_repaint_after(std::time::Duration::from_millis(100));
    }

    match app.set_list.phase.clone() {
        Phase::Loading => {
            widgets::loading_note(ui, "your sets");
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

    let busy = app.set_list.phase.is_busy();
    let mut create_clicked = false;
    let mut filter_change: Option<Option<i64>> = None;
    let mut action: Option<RowAction> = None;

    ui.horizontal(|ui| {
        ui.heading("Equipment Sets");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("➕ New Set").clicked() {
                create_clicked = true;
            }
        });
    });
    ui.add_space(6.0);

    ui.horizontal(|ui| {
        ui.label("Raid group:");
        let selected = match app.set_list.group_filter {
            Some(id) => group_label(&app.set_list.groups, id),
            None => "All groups".to_string(),
        };
        egui::ComboBox::from_id_salt("set_group_filter")
            .selected_text(selected)
            .show_ui(ui, |ui| {
                if ui
                    .selectable_label(app.set_list.group_filter.is_none(), "All groups")
                    .clicked()
                {
                    filter_change = Some(None);
                }
                for group in &app.set_list.groups {
                    if ui
                        .selectable_label(
                            app.set_list.group_filter == Some(group.id),
                            &group.name,
                        )
                        .clicked()
                    {
                        filter_change = Some(Some(group.id));
                    }
                }
            });
    });
    ui.add_space(10.0);

    if app.set_list.sets.is_empty() {
        widgets::empty_note(
            ui,
            "🗂",
            "No Equipment Sets",
            "Create a set to start tracking gear for your raid group",
        );
    } else {
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.add_enabled_ui(!busy, |ui| {
                for set in &app.set_list.sets {
                    let items = set.items();
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.horizontal(|ui| {
                                ui.label(egui::RichText::new(&set.name).size(17.0).strong());
                                widgets::kind_badge(ui, set.kind());
                            });
                            ui.label(
                                egui::RichText::new(format!(
                                    "{}  |  Average IL {:.0}",
                                    group_label(&app.set_list.groups, set.raid_group_id),
                                    set.total_item_level
                                ))
                                .weak(),
                            );
                            widgets::progress_bar(ui, set.obtained_count(), items.len());
                        });

                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                if app.set_list.confirm_delete == Some(set.id) {
                                    if ui.button("Cancel").clicked() {
                                        action = Some(RowAction::CancelDelete);
                                    }
                                    if ui
                                        .button(
                                            egui::RichText::new("Confirm delete")
                                                .color(egui::Color32::from_rgb(255, 120, 120)),
                                        )
                                        .clicked()
                                    {
                                        action = Some(RowAction::ConfirmDelete(set.id));
                                    }
                                } else {
                                    if ui
                                        .button(
                                            egui::RichText::new("Delete")
                                                .color(egui::Color32::from_rgb(255, 120, 120)),
                                        )
                                        .clicked()
                                    {
                                        action = Some(RowAction::AskDelete(set.id));
                                    }
                                    if ui.button("Duplicate").clicked() {
                                        action = Some(RowAction::Duplicate(set.id));
                                    }
                                    if ui.button("Edit").clicked() {
                                        action = Some(RowAction::Edit(set.id));
                                    }
                                    if ui.button("View").clicked() {
                                        action = Some(RowAction::View(set.id));
                                    }
                                }
                            },
                        );
                    });
                    ui.separator();
                }
            });
        });
    }

    if create_clicked {
        app.navigate(Page::SetCreate);
        return;
    }

    if let Some(new_filter) = filter_change {
        if new_filter != app.set_list.group_filter {
            app.set_list.group_filter = new_filter;
            reload(app);
            return;
        }
    }

    match action {
        Some(RowAction::View(id)) => app.navigate(Page::SetDetail(id)),
        Some(RowAction::Edit(id)) => app.navigate(Page::SetEdit(id)),
        Some(RowAction::Duplicate(id)) => start_duplicate(app, id),
        Some(RowAction::AskDelete(id)) => app.set_list.confirm_delete = Some(id),
        Some(RowAction::CancelDelete) => app.set_list.confirm_delete = None,
        Some(RowAction::ConfirmDelete(id)) => start_delete(app, id),
        None => {}
    }
}

fn poll(app: &mut GearApp) {
    if let Some(result) = Job::take(&mut app.set_list.load_job) {
        match result {
            Ok((sets, groups)) => {
                app.set_list.sets = sets;
                app.set_list.groups = groups;
                app.set_list.phase = Phase::Ready;
            }
            Err(e) => app.set_list.phase = Phase::Failed(e.to_string()),
        }
    }

    if let Some(outcome) = Job::take(&mut app.set_list.action_job) {
        match outcome {
            Outcome::Done(msg) => app.set_status(msg),
            Outcome::Partial(msg) | Outcome::Rejected(msg) => app.set_error(msg),
        }
        app.set_list.confirm_delete = None;
        // Reload either way; even a rejected action leaves the view stale
        reload(app);
    }

    // First frame after navigating here
    if app.set_list.phase == Phase::Loading && app.set_list.load_job.is_none() {
        reload(app);
    }
}

fn reload(app: &mut GearApp) {
    let equipment = app.services.equipment.clone();
    let raids = app.services.raids.clone();
    let group_filter = app.set_list.group_filter;
    app.set_list.phase = Phase::Loading;
    app.set_list.load_job = Some(Job::spawn(move || {
        let sets = equipment.my_sets(group_filter)?;
        let groups = raids.my_groups()?;
        Ok((sets, groups))
    }));
}

fn start_delete(app: &mut GearApp, id: i64) {
    let service = app.services.equipment.clone();
    app.set_list.phase = Phase::Submitting;
    app.set_list.action_job = Some(Job::spawn(move || match service.delete_set(id) {
        Ok(ack) => Outcome::Done(ack.message),
        Err(e) => Outcome::Rejected(format!("Failed to delete set: {}", e)),
    }));
}

/// Duplicate is two-phase: one set create, then the source's items
/// re-added one at a time. A failure partway leaves the copy with only
/// the items added so far.
fn start_duplicate(app: &mut GearApp, id: i64) {
    let service = app.services.equipment.clone();
    app.set_list.phase = Phase::Submitting;
    app.set_list.action_job = Some(Job::spawn(move || {
        let source = match service.get_set(id) {
            Ok(set) => set,
            Err(e) => {
                return Outcome::Rejected(format!("Failed to load set to duplicate: {}", e))
            }
        };
        let plan = plan_duplicate(&source);
        let total = plan.items.len();
        let created = match service.create_set(&plan.create) {
            Ok(set) => set,
            Err(e) => return Outcome::Rejected(format!("Failed to duplicate set: {}", e)),
        };
        for (index, item) in plan.items.iter().enumerate() {
            if let Err(e) = service.add_set_item(created.id, item) {
                return Outcome::Partial(format!(
                    "Created \"{}\", but copying item {} of {} failed: {}",
                    created.name,
                    index + 1,
                    total,
                    e
                ));
            }
        }
        Outcome::Done(format!("Duplicated as \"{}\"", created.name))
    }));
}

fn group_label(groups: &[RaidGroup], id: i64) -> String {
    groups
        .iter()
        .find(|g| g.id == id)
        .map(|g| g.name.clone())
        .unwrap_or_else(|| format!("Group {}", id))
}
