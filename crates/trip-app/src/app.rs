//! Main egui application: composes the panels and owns the itinerary view.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use egui::{self, CentralPanel, RichText, ScrollArea, SidePanel, TopBottomPanel, Vec2};

use trip_core::event_bus::EventBus;
use trip_core::planner::{generate_itinerary, GENERATION_FAILED_MESSAGE};
use trip_core::ports::{ChatPort, RealtimePort, SchedulePort};
use trip_core::view::ItineraryView;
use trip_platform::settings;
use trip_platform::{HttpScheduleClient, ProxyChatClient, WebSocketRealtime};
use trip_types::config::TripConfig;
use trip_types::event::{AppEvent, ViewEvent};
use trip_types::session::SessionContext;
use trip_ui::panels::itinerary::ItineraryAction;
use trip_ui::panels::settings::SettingsAction;
use trip_ui::panels::{chat, detail, itinerary, map, planner, summary};
use trip_ui::state::{SaveFeedback, Screen, UiState};
use trip_ui::theme;

const FONT_URL: &str = "NotoSansKR-Regular.otf";
/// Poll interval while a summary channel may push frames
const LIVE_REPAINT: Duration = Duration::from_millis(250);

pub struct TripApp {
    ui_state: UiState,
    config: TripConfig,
    session: SessionContext,
    app_events: EventBus<AppEvent>,
    view: Option<ItineraryView>,
    schedule: Rc<dyn SchedulePort>,
    chat: Rc<dyn ChatPort>,
    realtime: Rc<dyn RealtimePort>,
    first_frame: bool,
    font_loaded: Rc<RefCell<bool>>,
}

impl TripApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = settings::load_config();
        let session = settings::load_session();
        if session.token.is_none() {
            log::warn!("No session token found; requests will be sent anonymously");
        }

        let (schedule, chat, realtime) = Self::build_adapters(&config, &session);

        Self {
            ui_state: UiState::new(),
            config,
            session,
            app_events: EventBus::new(),
            view: None,
            schedule,
            chat,
            realtime,
            first_frame: true,
            font_loaded: Rc::new(RefCell::new(false)),
        }
    }

    fn build_adapters(
        config: &TripConfig,
        session: &SessionContext,
    ) -> (Rc<dyn SchedulePort>, Rc<dyn ChatPort>, Rc<dyn RealtimePort>) {
        (
            Rc::new(HttpScheduleClient::new(&config.api, session.clone())),
            Rc::new(ProxyChatClient::new(&config.chat)),
            Rc::new(WebSocketRealtime::new(config.api.realtime_url.clone())),
        )
    }

    /// Rebuild adapters after a settings change. An open view keeps its
    /// current channel until the next itinerary loads.
    fn rebuild_adapters(&mut self) {
        let (schedule, chat, realtime) = Self::build_adapters(&self.config, &self.session);
        self.schedule = schedule;
        self.chat = chat;
        self.realtime = realtime;
    }

    fn persist_config(&mut self, explicit: bool) {
        let result = settings::save_config(&self.config);
        match &result {
            Ok(()) => log::info!("Config saved"),
            Err(e) => log::error!("Failed to save config: {}", e),
        }
        if explicit {
            self.ui_state.save_feedback = Some(match result {
                Ok(()) => SaveFeedback {
                    message: "Saved".to_string(),
                    success: true,
                },
                Err(e) => SaveFeedback {
                    message: format!("Save failed: {}", e),
                    success: false,
                },
            });
        }
    }

    /// Fetch the Korean font from the server and install it into egui
    fn load_font(ctx: egui::Context, loaded_flag: Rc<RefCell<bool>>) {
        wasm_bindgen_futures::spawn_local(async move {
            let window = match web_sys::window() {
                Some(w) => w,
                None => return,
            };
            let resp = match wasm_bindgen_futures::JsFuture::from(window.fetch_with_str(FONT_URL)).await {
                Ok(r) => r,
                Err(e) => {
                    log::warn!("Failed to fetch font: {:?}", e);
                    return;
                }
            };
            let resp: web_sys::Response = resp.into();
            if !resp.ok() {
                log::warn!("Font request returned HTTP {}", resp.status());
                return;
            }
            let buf = match resp.array_buffer() {
                Ok(p) => match wasm_bindgen_futures::JsFuture::from(p).await {
                    Ok(b) => b,
                    Err(_) => return,
                },
                Err(_) => return,
            };
            let bytes = js_sys::Uint8Array::new(&buf).to_vec();

            let mut fonts = egui::FontDefinitions::default();
            fonts.font_data.insert(
                "noto_sans_kr".to_owned(),
                egui::FontData::from_owned(bytes).into(),
            );
            fonts
                .families
                .entry(egui::FontFamily::Proportional)
                .or_default()
                .insert(0, "noto_sans_kr".to_owned());
            fonts
                .families
                .entry(egui::FontFamily::Monospace)
                .or_default()
                .push("noto_sans_kr".to_owned());

            ctx.set_fonts(fonts);
            *loaded_flag.borrow_mut() = true;
            ctx.request_repaint();
            log::info!("Korean font loaded");
        });
    }

    /// Replace the current view with one showing `page`.
    fn open_itinerary(&mut self, page: trip_types::itinerary::PageItinerary) {
        // Old view closes its channel on drop
        self.view = None;
        let mut view = ItineraryView::new(&self.config.chat);
        view.load(page, self.realtime.as_ref());
        self.view = Some(view);
    }

    fn close_itinerary(&mut self) {
        self.view = None;
        self.ui_state.back_to_planner();
    }
}

impl eframe::App for TripApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            Self::load_font(ctx.clone(), self.font_loaded.clone());
            self.first_frame = false;
        }

        let events = self.app_events.drain();
        if !events.is_empty() {
            if let Some(page) = self.ui_state.process_events(events) {
                self.open_itinerary(page);
            }
            ctx.request_repaint();
        }

        if let Some(view) = self.view.as_mut() {
            if view.pump() {
                ctx.request_repaint();
            }
            if view.is_live() {
                ctx.request_repaint_after(LIVE_REPAINT);
            }
        }

        // ── Top bar ──────────────────────────────────────────
        let mut new_trip = false;
        TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("TRIP PLANNER")
                        .strong()
                        .color(theme::ACCENT)
                        .size(16.0),
                );
                ui.separator();
                ui.label(
                    RichText::new(&self.ui_state.status_text)
                        .color(theme::TEXT_SECONDARY)
                        .small(),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .selectable_label(self.ui_state.show_settings, "Settings")
                        .clicked()
                    {
                        self.ui_state.show_settings = !self.ui_state.show_settings;
                    }
                    if self.ui_state.screen == Screen::Itinerary && ui.button("New trip").clicked() {
                        new_trip = true;
                    }
                });
            });
        });
        if new_trip {
            self.close_itinerary();
        }

        // ── Settings side panel ──────────────────────────────
        if self.ui_state.show_settings {
            let action = SidePanel::right("settings_panel")
                .min_width(280.0)
                .max_width(350.0)
                .show(ctx, |ui| {
                    trip_ui::panels::settings::settings_panel(
                        ui,
                        &mut self.config,
                        self.ui_state.save_feedback.as_ref(),
                    )
                })
                .inner;
            match action {
                SettingsAction::Changed => {
                    self.ui_state.save_feedback = None;
                    self.rebuild_adapters();
                    self.persist_config(false);
                }
                SettingsAction::SaveClicked => {
                    self.rebuild_adapters();
                    self.persist_config(true);
                }
                SettingsAction::None => {}
            }
        }

        match self.ui_state.screen {
            Screen::Planner => self.show_planner(ctx),
            Screen::Itinerary => self.show_itinerary(ctx),
        }
    }
}

impl TripApp {
    fn show_planner(&mut self, ctx: &egui::Context) {
        let generate = CentralPanel::default()
            .show(ctx, |ui| {
                ScrollArea::vertical()
                    .show(ui, |ui| {
                        ui.vertical_centered(|ui| {
                            planner::planner_panel(
                                ui,
                                &mut self.ui_state.planner,
                                self.ui_state.generating,
                                self.ui_state.error.as_deref(),
                            )
                        })
                        .inner
                    })
                    .inner
            })
            .inner;

        if generate {
            self.dispatch_generation(ctx);
        }
    }

    fn show_itinerary(&mut self, ctx: &egui::Context) {
        let Some(view) = self.view.as_mut() else {
            CentralPanel::default().show(ctx, |ui| {
                ui.centered_and_justified(|ui| {
                    ui.label(RichText::new("Loading Itinerary...").color(theme::TEXT_SECONDARY));
                });
            });
            return;
        };

        // ── Chat side panel ──────────────────────────────────
        let placeholder = self.config.chat.placeholder.clone();
        let chat_input = &mut self.ui_state.chat_input;
        let submitted = SidePanel::right("chat_panel")
            .min_width(300.0)
            .default_width(360.0)
            .show(ctx, |ui| chat::chat_panel(ui, view.chat(), chat_input, &placeholder))
            .inner;

        // ── Main content ─────────────────────────────────────
        let (list_action, pin_clicked) = CentralPanel::default()
            .show(ctx, |ui| {
                ui.heading(RichText::new("YOUR ITINERARIES").color(theme::TEXT_PRIMARY).strong());
                ui.add_space(4.0);

                let available = ui.available_size();
                let upper_height = (available.y * 0.6).max(260.0);
                let list_width = available.x * 0.42;

                let (list_action, pin_clicked) = ui
                    .horizontal(|ui| {
                        let list_action = ui
                            .allocate_ui(Vec2::new(list_width, upper_height), |ui| {
                                itinerary::itinerary_panel(ui, &*view)
                            })
                            .inner;
                        let pin_clicked = ui
                            .allocate_ui(Vec2::new(ui.available_width(), upper_height), |ui| {
                                map::map_panel(ui, &view.map_view())
                            })
                            .inner;
                        (list_action, pin_clicked)
                    })
                    .inner;

                ui.add_space(8.0);
                ui.columns(2, |columns| {
                    summary::summary_panel(&mut columns[0], &*view);
                    if let Some(page) = view.page() {
                        summary::weather_panel(&mut columns[1], &page.weather_forecasts);
                    }
                });

                (list_action, pin_clicked)
            })
            .inner;

        match list_action {
            ItineraryAction::SelectItem(index) => {
                view.select_item(index);
            }
            ItineraryAction::PrevDay => {
                view.prev_day();
            }
            ItineraryAction::NextDay => {
                view.next_day();
            }
            ItineraryAction::None => {}
        }
        if let Some(index) = pin_clicked {
            view.select_item(index);
        }

        // ── Expanded item ────────────────────────────────────
        if let Some(selection) = view.selected().cloned() {
            if !detail::detail_window(ctx, &selection) {
                view.clear_selection();
            }
        }

        if let Some(text) = submitted {
            self.dispatch_chat(text, ctx);
        }
    }

    /// Run a generation request (async). The result comes back as an AppEvent.
    fn dispatch_generation(&mut self, ctx: &egui::Context) {
        let Some(req) = self.ui_state.begin_generation(self.config.origin) else {
            return;
        };
        let schedule = self.schedule.clone();
        let bus = self.app_events.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            let event = match generate_itinerary(schedule.as_ref(), &req).await {
                Some(page) => AppEvent::ItineraryReady { page },
                None => AppEvent::GenerationFailed {
                    message: GENERATION_FAILED_MESSAGE.to_string(),
                },
            };
            bus.emit(event);
            ctx.request_repaint();
        });
    }

    /// Send a chat message (async). The reply is delivered to the view that
    /// asked; if that view is gone by then, nobody drains it.
    fn dispatch_chat(&mut self, text: String, ctx: &egui::Context) {
        let Some(view) = self.view.as_mut() else {
            return;
        };
        let Some(prompt) = view.begin_chat(&text) else {
            return;
        };
        let chat = self.chat.clone();
        let bus = view.event_bus();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            let event = match chat.generate(&prompt).await {
                Ok(text) => ViewEvent::ChatReplied { text },
                Err(e) => ViewEvent::ChatFailed {
                    message: e.to_string(),
                },
            };
            bus.emit(event);
            ctx.request_repaint();
        });
    }
}
