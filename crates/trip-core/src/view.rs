//! Itinerary view controller.
//!
//! Owns everything one itinerary screen shows: the page, day pagination, the
//! expanded item, the live summary, the chat assistant, and the realtime
//! channel feeding the summary. Async work reports back through the view's
//! own [`EventBus`], drained by [`ItineraryView::pump`] on each frame.

use std::rc::Rc;

use trip_types::{
    TripError,
    config::ChatConfig,
    event::ViewEvent,
    itinerary::{ItineraryDay, ItineraryItem, PageItinerary},
    realtime::SummarySnapshot,
};

use crate::channel::{ChannelHandle, ChannelState, SummaryChannel};
use crate::chat::{ChatAssistant, ChatContext};
use crate::event_bus::EventBus;
use crate::map::{MapView, plan_map};
use crate::ports::RealtimePort;

/// Shown until the summarizer (or the generation response) provides text
pub const SUMMARY_PLACEHOLDER: &str = "Generating itinerary summary...";

/// The expanded item
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub item: ItineraryItem,
    /// 1-based position in the day's list
    pub number: usize,
    /// Forecast label for the day being viewed, e.g. "SAT"
    pub date_label: Option<String>,
}

pub struct ItineraryView {
    page: Option<PageItinerary>,
    current_day: usize,
    selected: Option<Selection>,
    summary_text: String,
    context: Rc<ChatContext>,
    chat: ChatAssistant,
    channel: Option<ChannelHandle>,
    /// Bumped on every `load`; summary events from older channels are stale
    generation: u64,
    event_bus: EventBus<ViewEvent>,
}

impl ItineraryView {
    /// A view with no itinerary yet. It stays in the loading state until `load`.
    pub fn new(chat: &ChatConfig) -> Self {
        Self {
            page: None,
            current_day: 0,
            selected: None,
            summary_text: String::new(),
            context: Rc::new(ChatContext::default()),
            chat: ChatAssistant::new(chat.max_memory),
            channel: None,
            generation: 0,
            event_bus: EventBus::new(),
        }
    }

    /// Install a page and open its summary channel.
    ///
    /// Any previous channel is closed first, so at most one connection is
    /// open per view.
    pub fn load(&mut self, page: PageItinerary, realtime: &dyn RealtimePort) {
        self.close_channel();
        self.generation += 1;

        self.current_day = 0;
        self.selected = None;
        self.summary_text = page.summary_text.clone();
        self.context = Rc::new(ChatContext::from_page(&page));

        let snapshot = SummarySnapshot::from_page(&page);
        self.page = Some(page);

        let bus = self.event_bus.clone();
        let generation = self.generation;
        self.channel = Some(SummaryChannel::open(realtime, &snapshot, move |text| {
            bus.emit(ViewEvent::SummaryUpdated { generation, text });
        }));
    }

    pub fn is_loading(&self) -> bool {
        self.page.is_none()
    }

    pub fn page(&self) -> Option<&PageItinerary> {
        self.page.as_ref()
    }

    pub fn day_count(&self) -> usize {
        self.page.as_ref().map_or(0, PageItinerary::day_count)
    }

    pub fn current_day_index(&self) -> usize {
        self.current_day
    }

    pub fn current_day(&self) -> Option<&ItineraryDay> {
        self.page.as_ref().and_then(|p| p.day(self.current_day))
    }

    pub fn is_first_day(&self) -> bool {
        self.current_day == 0
    }

    pub fn is_last_day(&self) -> bool {
        self.current_day + 1 >= self.day_count()
    }

    // ─── Pagination ──────────────────────────────────────────

    /// Move by `delta` days, clamped to the itinerary. Never wraps.
    /// Returns whether the index changed.
    pub fn select_day(&mut self, delta: isize) -> bool {
        let count = self.day_count();
        if count == 0 {
            return false;
        }
        let last = (count - 1) as isize;
        let target = (self.current_day as isize).saturating_add(delta).clamp(0, last) as usize;
        if target == self.current_day {
            return false;
        }
        self.current_day = target;
        true
    }

    pub fn prev_day(&mut self) -> bool {
        self.select_day(-1)
    }

    pub fn next_day(&mut self) -> bool {
        self.select_day(1)
    }

    // ─── Selection ───────────────────────────────────────────

    /// Expand the item at `index` in the current day, replacing any other.
    pub fn select_item(&mut self, index: usize) -> bool {
        let Some(page) = self.page.as_ref() else {
            return false;
        };
        let Some(item) = page.day(self.current_day).and_then(|d| d.items.get(index)) else {
            return false;
        };
        let date_label = page
            .weather_forecasts
            .get(self.current_day)
            .map(|f| f.day.clone());

        self.selected = Some(Selection {
            item: item.clone(),
            number: index + 1,
            date_label,
        });
        true
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&Selection> {
        self.selected.as_ref()
    }

    // ─── Summary ─────────────────────────────────────────────

    /// Summary text, or the placeholder while none has arrived
    pub fn summary_display(&self) -> &str {
        if self.summary_text.is_empty() {
            SUMMARY_PLACEHOLDER
        } else {
            &self.summary_text
        }
    }

    pub fn channel_state(&self) -> Option<ChannelState> {
        self.channel.as_ref().map(ChannelHandle::state)
    }

    /// Whether the summary channel can still deliver updates
    pub fn is_live(&self) -> bool {
        self.channel.as_ref().is_some_and(ChannelHandle::is_open)
    }

    // ─── Chat ────────────────────────────────────────────────

    /// Memoized context, rebuilt only when the page changes
    pub fn chat_context(&self) -> Rc<ChatContext> {
        self.context.clone()
    }

    pub fn chat(&self) -> &ChatAssistant {
        &self.chat
    }

    /// Start a chat send. The caller runs the returned prompt against a
    /// `ChatPort` and reports back with `ViewEvent::ChatReplied`/`ChatFailed`.
    pub fn begin_chat(&mut self, text: &str) -> Option<String> {
        self.chat.begin_send(text, &self.context)
    }

    // ─── Map ─────────────────────────────────────────────────

    pub fn map_view(&self) -> MapView {
        plan_map(self.current_day().map_or(&[][..], |d| d.items.as_slice()))
    }

    // ─── Events ──────────────────────────────────────────────

    /// Handle for async work that reports back to this view
    pub fn event_bus(&self) -> EventBus<ViewEvent> {
        self.event_bus.clone()
    }

    /// Drain and apply pending events. Returns whether anything was applied.
    pub fn pump(&mut self) -> bool {
        let events = self.event_bus.drain();
        if events.is_empty() {
            return false;
        }
        self.process_events(events);
        true
    }

    /// Apply events in receipt order; the last summary wins.
    pub fn process_events(&mut self, events: Vec<ViewEvent>) {
        for event in events {
            match event {
                ViewEvent::SummaryUpdated { generation, text } => {
                    if generation == self.generation && self.channel.is_some() {
                        self.summary_text = text;
                    } else {
                        log::debug!("Discarding summary from stale channel {}", generation);
                    }
                }
                ViewEvent::ChatReplied { text } => self.chat.complete_reply(text),
                ViewEvent::ChatFailed { message } => {
                    self.chat.complete_failure(&TripError::Chat(message))
                }
            }
        }
    }

    /// Release the channel and drop pending events. Also runs on drop.
    pub fn teardown(&mut self) {
        self.close_channel();
        self.event_bus.drain();
    }

    fn close_channel(&mut self) {
        if let Some(mut channel) = self.channel.take() {
            channel.close();
        }
    }
}

impl Drop for ItineraryView {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl ChatContext {
    /// Flattened day-by-day listing plus the forecast listing.
    pub fn from_page(page: &PageItinerary) -> Self {
        let itinerary = page
            .full_itinerary
            .iter()
            .map(|day| {
                let items: Vec<String> = day
                    .items
                    .iter()
                    .map(|item| format!("  - {}: {}", item.title, item.description))
                    .collect();
                format!("Day {}:\n{}", day.day, items.join("\n"))
            })
            .collect::<Vec<_>>()
            .join("\n\n");

        let forecasts: Vec<String> = page
            .weather_forecasts
            .iter()
            .map(|f| format!("- {}: The temperature will be around {}.", f.day, f.temp))
            .collect();
        let weather = format!("Weather Forecast:\n{}", forecasts.join("\n"));

        Self { itinerary, weather }
    }
}
