use super::api;
use chrono::Datelike;
use contracts::dashboards::d402_indicator_explorer::{
    ExplorerCommand, ExplorerController, ExplorerEffect, Notice, NoticeSlot,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// ViewModel for the indicator explorer page.
///
/// Wraps the controller in a signal so components re-render on state
/// changes, and executes the effects the controller asks for.
#[derive(Clone, Copy)]
pub struct ExplorerViewModel {
    pub controller: RwSignal<ExplorerController>,
    pub notice: RwSignal<NoticeSlot>,
    pub notice_open: RwSignal<bool>,
}

impl ExplorerViewModel {
    pub fn new() -> Self {
        let current_year = chrono::Utc::now().year();
        Self {
            controller: RwSignal::new(ExplorerController::new(current_year)),
            notice: RwSignal::new(NoticeSlot::default()),
            notice_open: RwSignal::new(false),
        }
    }

    /// Load the indicator catalog
    pub fn start(&self) {
        let effects = self.controller.with_untracked(|c| c.start());
        self.run(effects);
    }

    pub fn dispatch(&self, command: ExplorerCommand) {
        log::debug!("[d402] {:?}", command);
        let effects = self
            .controller
            .try_update(|c| c.handle(command))
            .unwrap_or_default();
        self.run(effects);
    }

    pub fn close_notice(&self) {
        self.notice_open.set(false);
    }

    fn run(&self, effects: Vec<ExplorerEffect>) {
        for effect in effects {
            self.run_effect(effect);
        }
    }

    fn run_effect(&self, effect: ExplorerEffect) {
        let vm = *self;
        match effect {
            ExplorerEffect::LoadIndicators => spawn_local(async move {
                let result = api::fetch_indicators().await;
                if let Err(e) = &result {
                    log::error!("[d402] indicator list: {}", e);
                }
                let effects = vm
                    .controller
                    .try_update(|c| c.on_indicators_loaded(result))
                    .unwrap_or_default();
                vm.run(effects);
            }),
            ExplorerEffect::LoadCountries { token, query } => spawn_local(async move {
                let result = api::fetch_available_countries(&query).await;
                if !vm.controller.with_untracked(|c| c.is_current_countries(token)) {
                    log::debug!("[d402] dropping stale country list for {}", query.path());
                    return;
                }
                if let Err(e) = &result {
                    log::error!("[d402] available countries: {}", e);
                }
                let effects = vm
                    .controller
                    .try_update(|c| c.on_countries_loaded(token, result))
                    .unwrap_or_default();
                vm.run(effects);
            }),
            ExplorerEffect::FetchData { token, query } => spawn_local(async move {
                let result = api::fetch_data(&query).await;
                if !vm.controller.with_untracked(|c| c.is_current_data(token)) {
                    log::debug!("[d402] dropping stale data for {}", query.data_path());
                    return;
                }
                if let Err(e) = &result {
                    log::error!("[d402] Error fetching data: {}", e);
                }
                let effects = vm
                    .controller
                    .try_update(|c| c.on_data_loaded(token, result))
                    .unwrap_or_default();
                vm.run(effects);
            }),
            ExplorerEffect::Notify(notice) => self.show_notice(notice),
        }
    }

    fn show_notice(&self, notice: Notice) {
        let auto_close = notice.auto_close_ms;
        let Some(ticket) = self.notice.try_update(|slot| slot.show(notice)) else {
            return;
        };
        self.notice_open.set(true);

        if let Some(ms) = auto_close {
            let vm = *self;
            spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(ms).await;
                // a newer notice may have replaced this one meanwhile
                if vm.notice.with_untracked(|slot| slot.is_current(ticket)) {
                    vm.notice_open.set(false);
                }
            });
        }
    }
}
