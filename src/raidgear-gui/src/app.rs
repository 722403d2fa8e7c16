use eframe::egui;
use raidgear_api::{ApiClient, Config, EquipmentService, RaidService};

use crate::ui;

/// The active page; detail and edit carry the set they operate on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    SetList,
    SetCreate,
    SetDetail(i64),
    SetEdit(i64),
    EquipmentList,
    EquipmentCreate,
}

/// Lifecycle of a page's server interaction. Pages move Loading to Ready
/// around the initial fetch and Ready to Submitting around mutations;
/// Failed holds the message when the initial load itself died.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Loading,
    Ready,
    Submitting,
    Failed(String),
}

impl Phase {
    /// True while a request is in flight for this page
    pub fn is_busy(&self) -> bool {
        matches!(self, Phase::Loading | Phase::Submitting)
    }
}

/// Shared service handles; cheap to clone into worker threads
#[derive(Clone)]
pub struct Services {
    pub equipment: EquipmentService,
    pub raids: RaidService,
}

impl Services {
    pub fn new(base_url: &str) -> Self {
        let client = ApiClient::new(base_url);
        Self {
            equipment: EquipmentService::new(client.clone()),
            raids: RaidService::new(client),
        }
    }
}

pub struct GearApp {
    pub page: Page,
    pub services: Services,
    pub api_url: String,

    pub error_message: Option<String>,
    pub status_message: Option<String>,

    pub set_list: ui::set_list::SetListState,
    pub set_create: ui::set_create::SetCreateState,
    pub set_detail: ui::set_detail::SetDetailState,
    pub set_edit: ui::set_edit::SetEditState,
    pub equipment_list: ui::equipment_list::EquipmentListState,
    pub equipment_create: ui::equipment_create::EquipmentCreateState,
}

impl GearApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, start_page: Page) -> Self {
        let api_url = Config::load().unwrap_or_default().resolve_api_url(None);

        let mut app = Self {
            page: Page::default(),
            services: Services::new(&api_url),
            api_url,
            error_message: None,
            status_message: None,
            set_list: Default::default(),
            set_create: Default::default(),
            set_detail: Default::default(),
            set_edit: Default::default(),
            equipment_list: Default::default(),
            equipment_create: Default::default(),
        };
        app.navigate(start_page);
        app
    }

    /// Switch pages, resetting the destination's state so it reloads
    /// authoritative data from the server.
    pub fn navigate(&mut self, page: Page) {
        match page {
            Page::SetList => self.set_list = Default::default(),
            Page::SetCreate => self.set_create = Default::default(),
            Page::SetDetail(id) => self.set_detail = ui::set_detail::SetDetailState::for_set(id),
            Page::SetEdit(id) => self.set_edit = ui::set_edit::SetEditState::for_set(id),
            Page::EquipmentList => self.equipment_list = Default::default(),
            Page::EquipmentCreate => self.equipment_create = Default::default(),
        }
        self.page = page;
    }

    pub fn set_error(&mut self, msg: String) {
        self.error_message = Some(msg);
        self.status_message = None;
    }

    pub fn set_status(&mut self, msg: String) {
        self.status_message = Some(msg);
        self.error_message = None;
    }
}

impl eframe::App for GearApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut nav: Option<Page> = None;

        // Top navigation
        egui::TopBottomPanel::top("nav_bar")
            .show_separator_line(false)
            .frame(
                egui::Frame::none()
                    .fill(egui::Color32::from_rgb(34, 36, 40))
                    .inner_margin(egui::Margin::symmetric(16.0, 10.0)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("raidgear").strong().size(18.0));
                    ui.add_space(16.0);

                    let on_sets = matches!(
                        self.page,
                        Page::SetList | Page::SetCreate | Page::SetDetail(_) | Page::SetEdit(_)
                    );
                    if ui.selectable_label(on_sets, "Sets").clicked() {
                        nav = Some(Page::SetList);
                    }
                    if ui
                        .selectable_label(self.page == Page::EquipmentList, "Equipment")
                        .clicked()
                    {
                        nav = Some(Page::EquipmentList);
                    }
                    if ui
                        .selectable_label(self.page == Page::EquipmentCreate, "Add Equipment")
                        .clicked()
                    {
                        nav = Some(Page::EquipmentCreate);
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(egui::RichText::new(&self.api_url).weak().small());
                    });
                });
            });

        if let Some(page) = nav {
            self.navigate(page);
        }

        // Bottom status bar
        egui::TopBottomPanel::bottom("status_bar")
            .show_separator_line(false)
            .frame(
                egui::Frame::none()
                    .fill(egui::Color32::from_rgb(34, 36, 40))
                    .inner_margin(egui::Margin::symmetric(16.0, 6.0)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.style_mut().override_text_style = Some(egui::TextStyle::Small);

                    if let Some(err) = &self.error_message {
                        ui.colored_label(egui::Color32::RED, format!("Error: {}", err));
                    } else if let Some(status) = &self.status_message {
                        ui.colored_label(egui::Color32::from_rgb(100, 200, 100), status);
                    } else {
                        ui.label("Ready");
                    }
                });
            });

        // Main content
        egui::CentralPanel::default().show(ctx, |ui| match self.page {
            Page::SetList => ui::set_list::show(ui, self),
            Page::SetCreate => ui::set_create::show(ui, self),
            Page::SetDetail(_) => ui::set_detail::show(ui, self),
            Page::SetEdit(_) => ui::set_edit::show(ui, self),
            Page::EquipmentList => ui::equipment_list::show(ui, self),
            Page::EquipmentCreate => ui::equipment_create::show(ui, self),
        });

        // Blocking notification for failed actions
        if self.error_message.is_some() {
            let mut dismissed = false;
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.set_min_width(360.0);
                    if let Some(msg) = &self.error_message {
                        ui.colored_label(egui::Color32::from_rgb(240, 120, 120), msg);
                    }
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            if dismissed {
                self.error_message = None;
            }
        }
    }
}
