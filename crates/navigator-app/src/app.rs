//! Main egui application — composes the page and owns the chat session.

use std::cell::RefCell;
use std::rc::Rc;

use egui::{CentralPanel, ScrollArea, SidePanel};

use navigator_core::event_bus::EventBus;
use navigator_core::ports::CompletionPort;
use navigator_core::secrets::load_api_key;
use navigator_core::session::ChatSession;
use navigator_platform::llm::OpenAiCompatProvider;
use navigator_platform::page_config::load_page_config;
use navigator_platform::secrets::WindowSecrets;
use navigator_types::config::{NavigatorConfig, API_KEY_SECRET};
use navigator_ui::panels::{chat, header, notice, sidebar};
use navigator_ui::state::{UiState, UserAction};
use navigator_ui::theme;

enum Startup {
    Ready {
        session: Rc<RefCell<ChatSession>>,
        llm: Rc<dyn CompletionPort>,
    },
    /// Missing credential: the page shows a notice and accepts no input
    Failed(String),
}

pub struct NavigatorApp {
    ui_state: UiState,
    event_bus: EventBus,
    startup: Startup,
    first_frame: bool,
}

impl NavigatorApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = match load_page_config() {
            Ok(Some(config)) => config,
            Ok(None) => NavigatorConfig::default(),
            Err(e) => {
                log::warn!("Ignoring page config override: {}", e);
                NavigatorConfig::default()
            }
        };

        let event_bus = EventBus::new();
        let session = ChatSession::new(&config, event_bus.clone());
        let ui_state = UiState::new(session.conversation().turns());

        let startup = match load_api_key(&WindowSecrets::new()) {
            Ok(api_key) => Startup::Ready {
                session: Rc::new(RefCell::new(session)),
                llm: Rc::new(OpenAiCompatProvider::new(&config.llm, api_key)),
            },
            Err(e) => Startup::Failed(format!(
                "Please add {} to your secrets ({}).",
                API_KEY_SECRET, e
            )),
        };

        Self {
            ui_state,
            event_bus,
            startup,
            first_frame: true,
        }
    }
}

impl eframe::App for NavigatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        if let Startup::Failed(message) = &self.startup {
            CentralPanel::default().show(ctx, |ui| {
                header::header_panel(ui);
                notice::fatal_notice(ui, message);
            });
            return;
        }

        let events = self.event_bus.drain();
        if !events.is_empty() {
            self.ui_state.process_events(events);
            ctx.request_repaint();
        }

        if self.ui_state.is_busy() {
            ctx.request_repaint();
        }

        let mut action = None;

        // ── Sidebar ──────────────────────────────────────────
        SidePanel::left("sidebar")
            .resizable(false)
            .default_width(280.0)
            .show(ctx, |ui| {
                ScrollArea::vertical().show(ui, |ui| {
                    action = sidebar::sidebar_panel(ui, &self.ui_state);
                });
            });

        // ── Main content ─────────────────────────────────────
        CentralPanel::default().show(ctx, |ui| {
            header::header_panel(ui);
            if let Some(submitted) = chat::chat_panel(ui, &mut self.ui_state) {
                action = Some(submitted);
            }
        });

        if let Some(action) = action {
            self.dispatch(action, ctx);
        }
    }
}

impl NavigatorApp {
    fn dispatch(&self, action: UserAction, ctx: &egui::Context) {
        let Startup::Ready { session, llm } = &self.startup else {
            return;
        };

        // The session stays borrowed for the whole remote call, so a failed
        // borrow means a reply is still pending.
        if session.try_borrow_mut().is_err() {
            log::warn!("Ignoring {:?}: a reply is still pending", action);
            return;
        }

        if action == UserAction::Clear {
            if let Err(e) = session.borrow_mut().clear() {
                log::warn!("Clear rejected: {}", e);
            }
            return;
        }

        let session = session.clone();
        let llm = llm.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            let result = {
                let mut session = session.borrow_mut();
                match action {
                    UserAction::Topic(topic) => session.submit_topic(topic, llm.as_ref()).await,
                    UserAction::Submit(text) => session.submit(&text, llm.as_ref()).await,
                    UserAction::Clear => return,
                }
            };
            if let Err(e) = result {
                log::warn!("Submission rejected: {}", e);
            }
            ctx.request_repaint();
        });
    }
}
