//! Tests de navegador: `wasm-pack test --headless --firefox`
#![cfg(target_arch = "wasm32")]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use canteen_ui::app::{CanteenPage, MountSummary};
use canteen_ui::config::UiConfig;
use canteen_ui::error::UiError;
use canteen_ui::models::ToastKind;
use canteen_ui::toolkit::{Clock, Dialogs, UiToolkit};
use canteen_ui::utils::{TOAST_CONTAINER_ID, TOAST_HIDDEN_EVENT};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, Event, HtmlElement, HtmlFormElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

#[derive(Default)]
struct RecordingToolkit {
    tooltips: Cell<usize>,
    alerts_closed: Cell<usize>,
    toasts_shown: Cell<usize>,
}

impl UiToolkit for RecordingToolkit {
    fn init_tooltip(&self, _element: &Element) -> Result<(), UiError> {
        self.tooltips.set(self.tooltips.get() + 1);
        Ok(())
    }

    fn close_alert(&self, element: &Element) -> Result<(), UiError> {
        self.alerts_closed.set(self.alerts_closed.get() + 1);
        element.remove();
        Ok(())
    }

    fn show_toast(&self, _element: &Element) -> Result<(), UiError> {
        self.toasts_shown.set(self.toasts_shown.get() + 1);
        Ok(())
    }
}

#[derive(Default)]
struct ScriptedDialogs {
    answer: bool,
    confirms: RefCell<Vec<String>>,
    alerts: RefCell<Vec<String>>,
}

impl Dialogs for ScriptedDialogs {
    fn confirm(&self, message: &str) -> bool {
        self.confirms.borrow_mut().push(message.to_string());
        self.answer
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}

struct FixedClock(NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

fn lunchtime() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, 9)
        .unwrap()
        .and_hms_opt(11, 42, 17)
        .unwrap()
}

struct Harness {
    page: CanteenPage,
    toolkit: Rc<RecordingToolkit>,
    dialogs: Rc<ScriptedDialogs>,
}

fn harness_with(config: UiConfig, answer: bool) -> Harness {
    let toolkit = Rc::new(RecordingToolkit::default());
    let dialogs = Rc::new(ScriptedDialogs {
        answer,
        ..ScriptedDialogs::default()
    });
    let page = CanteenPage::new(
        toolkit.clone(),
        dialogs.clone(),
        Rc::new(FixedClock(lunchtime())),
        config,
    );
    Harness {
        page,
        toolkit,
        dialogs,
    }
}

fn harness() -> Harness {
    harness_with(UiConfig::default(), true)
}

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Monta un fragmento en el body; se retira con `remove()` al terminar
fn fixture(html: &str) -> Element {
    let doc = document();
    let root = doc.create_element("div").unwrap();
    root.set_inner_html(html);
    doc.body().unwrap().append_child(&root).unwrap();
    root
}

fn by_id<T: JsCast>(id: &str) -> T {
    document().get_element_by_id(id).unwrap().dyn_into::<T>().unwrap()
}

#[wasm_bindgen_test]
async fn mount_wires_tooltips_alerts_pickup_inputs_and_cards() {
    let root = fixture(
        r#"
        <span id="tip-a" data-bs-toggle="tooltip" title="Vegan"></span>
        <span id="tip-b" data-bs-toggle="tooltip" title="Halal"></span>
        <div id="flash" class="alert alert-success">Reservation saved</div>
        <div id="sticky" class="alert alert-info alert-permanent">Closed on Sundays</div>
        <input id="pickup-empty" type="datetime-local">
        <input id="pickup-set" type="datetime-local" value="2026-03-10T09:00">
        <div class="card" id="card-0"></div>
        <div class="card" id="card-1"></div>
        <div class="card" id="card-2"></div>
        "#,
    );
    let config = UiConfig {
        alert_dismiss_ms: 30,
        card_stagger_ms: 10,
        ..UiConfig::default()
    };
    let h = harness_with(config, true);

    let summary = h.page.mount(&document()).unwrap();
    assert_eq!(
        summary,
        MountSummary {
            tooltips: 2,
            alerts_scheduled: 1,
            pickup_inputs: 2,
            cards: 3,
        }
    );
    assert_eq!(h.toolkit.tooltips.get(), 2);

    let empty: HtmlInputElement = by_id("pickup-empty");
    assert_eq!(empty.min(), "2026-03-09T12:43");
    assert_eq!(empty.value(), "2026-03-09T12:43");
    let set: HtmlInputElement = by_id("pickup-set");
    assert_eq!(set.min(), "2026-03-09T12:43");
    assert_eq!(set.value(), "2026-03-10T09:00");

    TimeoutFuture::new(100).await;

    assert_eq!(h.toolkit.alerts_closed.get(), 1);
    assert!(document().get_element_by_id("flash").is_none());
    assert!(document().get_element_by_id("sticky").is_some());
    for id in ["card-0", "card-1", "card-2"] {
        let card: Element = by_id(id);
        assert!(card.class_list().contains("fade-in"), "{} not faded in", id);
    }

    root.remove();
}

#[wasm_bindgen_test]
fn confirm_delete_uses_default_or_given_message() {
    let h = harness_with(UiConfig::default(), false);
    assert!(!h.page.confirm_delete(None));
    assert!(!h.page.confirm_delete(Some("Cancel this reservation?")));
    assert_eq!(
        *h.dialogs.confirms.borrow(),
        vec![
            "Are you sure you want to delete this?".to_string(),
            "Cancel this reservation?".to_string(),
        ]
    );
}

#[wasm_bindgen_test]
fn loading_state_round_trip() {
    let root = fixture(r#"<button id="reserve-btn">Reserve</button>"#);
    let h = harness();
    let button: Element = by_id("reserve-btn");

    h.page.show_loading(&button, None).unwrap();
    assert!(button.has_attribute("disabled"));
    assert!(button.query_selector("span.spinner").unwrap().is_some());
    assert_eq!(button.text_content().unwrap(), " Loading...");

    h.page.hide_loading(&button, "Reserve").unwrap();
    assert!(!button.has_attribute("disabled"));
    assert_eq!(button.inner_html(), "Reserve");

    h.page.show_loading(&button, Some("<b>Saving</b>")).unwrap();
    assert!(button.query_selector("b").unwrap().is_none());

    root.remove();
}

#[wasm_bindgen_test]
fn toasts_are_added_then_removed_when_hidden() {
    let h = harness();
    let doc = document();

    let toasts: Vec<Element> = (0..3)
        .map(|i| {
            h.page
                .show_toast(&doc, &format!("Order <{}> ready", i), ToastKind::Success)
                .unwrap()
        })
        .collect();

    let container = doc.get_element_by_id(TOAST_CONTAINER_ID).unwrap();
    assert_eq!(container.child_element_count(), 3);
    assert_eq!(h.toolkit.toasts_shown.get(), 3);
    assert_eq!(
        doc.query_selector_all(&format!("#{}", TOAST_CONTAINER_ID))
            .unwrap()
            .length(),
        1
    );

    let first = &toasts[0];
    assert!(first.class_list().contains("bg-success"));
    assert_eq!(first.get_attribute("role").as_deref(), Some("alert"));
    let body = first.query_selector(".toast-body").unwrap().unwrap();
    assert_eq!(body.text_content().unwrap(), "Order <0> ready");

    for (dismissed, toast) in toasts.iter().enumerate() {
        toast
            .dispatch_event(&Event::new(TOAST_HIDDEN_EVENT).unwrap())
            .unwrap();
        assert_eq!(container.child_element_count() as usize, 2 - dismissed);
    }
    assert_eq!(container.child_element_count(), 0);
}

#[wasm_bindgen_test]
fn toast_container_uses_the_configured_z_index() {
    let doc = document();
    if let Some(existing) = doc.get_element_by_id(TOAST_CONTAINER_ID) {
        existing.remove();
    }
    let config = UiConfig {
        toast_z_index: 1234,
        ..UiConfig::default()
    };
    let h = harness_with(config, true);

    let toast = h.page.show_toast(&doc, "Menu updated", ToastKind::Info).unwrap();

    let container: HtmlElement = by_id(TOAST_CONTAINER_ID);
    assert_eq!(container.style().get_property_value("z-index").unwrap(), "1234");
    toast
        .dispatch_event(&Event::new(TOAST_HIDDEN_EVENT).unwrap())
        .unwrap();
    container.remove();
}

#[wasm_bindgen_test]
fn stock_badges_follow_the_current_value() {
    let root = fixture(
        r#"
        <div data-meal-id="7"><span id="b1" class="badge stock-badge bg-success">20</span></div>
        <div data-meal-id="7"><span id="b2" class="badge stock-badge bg-success">20</span></div>
        <div data-meal-id="8"><span id="other" class="badge stock-badge bg-success">12</span></div>
        "#,
    );
    let h = harness();
    let doc = document();
    let b1: Element = by_id("b1");
    let b2: Element = by_id("b2");
    let other: Element = by_id("other");

    assert_eq!(h.page.update_stock_display(&doc, "7", 50).unwrap(), 2);
    assert!(b1.class_list().contains("bg-success"));

    h.page.update_stock_display(&doc, "7", 5).unwrap();
    for badge in [&b1, &b2] {
        assert_eq!(badge.text_content().unwrap(), "5");
        assert!(badge.class_list().contains("bg-warning"));
        assert!(!badge.class_list().contains("bg-success"));
    }

    h.page.update_stock_display(&doc, "7", 0).unwrap();
    for badge in [&b1, &b2] {
        assert!(badge.class_list().contains("bg-danger"));
        assert!(!badge.class_list().contains("bg-warning"));
    }

    // Reposición: vuelve a success
    h.page.update_stock_display(&doc, "7", 50).unwrap();
    assert!(b1.class_list().contains("bg-success"));
    assert!(!b1.class_list().contains("bg-danger"));

    assert_eq!(other.text_content().unwrap(), "12");
    assert!(other.class_list().contains("bg-success"));

    assert_eq!(h.page.update_stock_display(&doc, "7\"] *", 1).unwrap(), 0);

    root.remove();
}

#[wasm_bindgen_test]
fn search_table_shows_only_matching_rows() {
    let root = fixture(
        r#"
        <input id="menu-search" type="text">
        <table id="menu-table">
          <tr id="r0"><th>Meal</th><th>Price</th></tr>
          <tr id="r1"><td>Veggie lasagne</td><td>£4.00</td></tr>
          <tr id="r2"><td>Chicken Curry</td><td>£4.50</td></tr>
          <tr id="r3"><td>Fish and chips</td><td>£5.20</td></tr>
          <tr id="r4"><td>Chickpea curry</td><td>£3.90</td></tr>
          <tr id="r5"><td>Jacket potato</td><td>£3.10</td></tr>
        </table>
        "#,
    );
    let h = harness();
    let input: HtmlInputElement = by_id("menu-search");
    let table: Element = by_id("menu-table");
    h.page.search_table(&input, &table).unwrap();

    let display = |id: &str| {
        by_id::<HtmlElement>(id)
            .style()
            .get_property_value("display")
            .unwrap()
    };

    input.set_value("CURRY");
    input.dispatch_event(&Event::new("keyup").unwrap()).unwrap();
    assert_eq!(display("r0"), "");
    assert_eq!(display("r1"), "none");
    assert_eq!(display("r2"), "");
    assert_eq!(display("r3"), "none");
    assert_eq!(display("r4"), "");
    assert_eq!(display("r5"), "none");

    input.set_value("");
    input.dispatch_event(&Event::new("input").unwrap()).unwrap();
    for id in ["r1", "r2", "r3", "r4", "r5"] {
        assert_eq!(display(id), "");
    }

    root.remove();
}

fn reservation_form(pickup: &str, quantity: &str) -> (Element, HtmlFormElement) {
    let root = fixture(&format!(
        r#"<form id="reserve-form">
             <input type="datetime-local" name="pickup_time" value="{}">
             <input type="number" name="quantity" value="{}">
           </form>"#,
        pickup, quantity
    ));
    (root, by_id("reserve-form"))
}

#[wasm_bindgen_test]
fn reservation_in_two_hours_passes() {
    let h = harness();
    let (root, form) = reservation_form("2026-03-09T13:43", "1");
    assert!(h.page.validate_reservation_form(&form));
    assert!(h.dialogs.alerts.borrow().is_empty());
    root.remove();
}

#[wasm_bindgen_test]
fn reservation_for_now_is_rejected_with_alert() {
    let h = harness();
    let (root, form) = reservation_form("2026-03-09T11:42", "2");
    assert!(!h.page.validate_reservation_form(&form));
    assert_eq!(
        *h.dialogs.alerts.borrow(),
        vec!["Pickup time must be at least 1 hour from now".to_string()]
    );
    root.remove();
}

#[wasm_bindgen_test]
fn reservation_with_zero_quantity_is_rejected() {
    let h = harness();
    let later = lunchtime() + Duration::days(1);
    let (root, form) = reservation_form(&later.format("%Y-%m-%dT%H:%M").to_string(), "0");
    assert!(!h.page.validate_reservation_form(&form));
    assert_eq!(
        *h.dialogs.alerts.borrow(),
        vec!["Quantity must be at least 1".to_string()]
    );
    root.remove();
}

#[wasm_bindgen_test]
fn prefilled_pickup_time_passes_validation() {
    let root = fixture(
        r#"<form id="prefilled-form">
             <input type="datetime-local" name="pickup_time">
             <input type="number" name="quantity" value="1">
           </form>"#,
    );
    let h = harness();
    h.page.mount(&document()).unwrap();
    let form: HtmlFormElement = by_id("prefilled-form");
    assert!(h.page.validate_reservation_form(&form));
    assert!(h.dialogs.alerts.borrow().is_empty());
    root.remove();
}

#[wasm_bindgen_test]
fn blank_fields_are_left_to_the_server() {
    let h = harness();
    let (root, form) = reservation_form("", "");
    assert!(h.page.validate_reservation_form(&form));
    assert!(h.dialogs.alerts.borrow().is_empty());
    root.remove();
}
