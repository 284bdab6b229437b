//! Interaction tests through the binder: callback wiring across updates,
//! disabled-row suppression, and stale-callback replacement.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use rowbind::render::RenderHandle;
use rowbind::{GenericViewFactory, ListBinder, SettingsRow, Theme};

fn new_binder() -> ListBinder<GenericViewFactory> {
    ListBinder::new(GenericViewFactory, Theme::dark())
}

#[test]
fn test_switch_callback_fires_with_new_state() {
    let seen: Rc<RefCell<Vec<bool>>> = Rc::default();
    let mut binder = new_binder();
    let log = Rc::clone(&seen);
    binder
        .update(
            vec![SettingsRow::switch("Enabled", false, move |on| {
                log.borrow_mut().push(on)
            })],
            false,
        )
        .unwrap();

    match binder.views_mut().slots_mut()[0].handle_mut() {
        RenderHandle::Switch(view) => {
            view.set_checked_from_user(true);
            view.set_checked_from_user(false);
        }
        _ => panic!("wrong handle variant"),
    }
    assert_eq!(*seen.borrow(), vec![true, false]);
}

#[test]
fn test_setting_click_reaches_the_row_callback() {
    let clicks = Rc::new(Cell::new(0));
    let mut binder = new_binder();
    let counter = Rc::clone(&clicks);
    binder
        .update(
            vec![SettingsRow::setting("Account", "", None, move || {
                counter.set(counter.get() + 1)
            })],
            false,
        )
        .unwrap();

    match binder.views().slots()[0].handle() {
        RenderHandle::Setting(view) => view.press(),
        _ => panic!("wrong handle variant"),
    }
    assert_eq!(clicks.get(), 1);
}

#[test]
fn test_disabled_row_suppresses_interaction_after_update() {
    let fired = Rc::new(Cell::new(false));
    let mut binder = new_binder();

    // Bound enabled first, then rebind disabled over the same slot.
    binder
        .update(
            vec![SettingsRow::switch_setting("Sync", "", None, true, true, |_| {})],
            false,
        )
        .unwrap();
    let flag = Rc::clone(&fired);
    binder
        .update(
            vec![SettingsRow::switch_setting(
                "Sync",
                "",
                None,
                true,
                false,
                move |_| flag.set(true),
            )],
            false,
        )
        .unwrap();

    match binder.views_mut().slots_mut()[0].handle_mut() {
        RenderHandle::SwitchSetting(view) => {
            assert!(!view.enabled);
            view.toggle_from_user();
            assert!(view.checked, "disabled row keeps its bound state");
        }
        _ => panic!("wrong handle variant"),
    }
    assert!(!fired.get());
}

#[test]
fn test_update_replaces_stale_callbacks() {
    let stale = Rc::new(Cell::new(0));
    let fresh = Rc::new(Cell::new(0));
    let mut binder = new_binder();

    let counter = Rc::clone(&stale);
    binder
        .update(
            vec![SettingsRow::switch("Enabled", false, move |_| {
                counter.set(counter.get() + 1)
            })],
            false,
        )
        .unwrap();
    let counter = Rc::clone(&fresh);
    binder
        .update(
            vec![SettingsRow::switch("Enabled", true, move |_| {
                counter.set(counter.get() + 1)
            })],
            false,
        )
        .unwrap();

    match binder.views_mut().slots_mut()[0].handle_mut() {
        RenderHandle::Switch(view) => view.set_checked_from_user(false),
        _ => panic!("wrong handle variant"),
    }
    assert_eq!(stale.get(), 0, "replaced callback must never fire");
    assert_eq!(fresh.get(), 1);
}

#[test]
fn test_reenabled_row_fires_again() {
    let count = Rc::new(Cell::new(0));
    let mut binder = new_binder();

    let counter = Rc::clone(&count);
    let disabled = move || {
        let counter = Rc::clone(&counter);
        vec![SettingsRow::switch_setting(
            "Sync",
            "",
            None,
            false,
            false,
            move |_| counter.set(counter.get() + 1),
        )]
    };
    binder.update(disabled(), false).unwrap();
    match binder.views_mut().slots_mut()[0].handle_mut() {
        RenderHandle::SwitchSetting(view) => view.toggle_from_user(),
        _ => panic!("wrong handle variant"),
    }
    assert_eq!(count.get(), 0);

    let counter = Rc::clone(&count);
    binder
        .update(
            vec![SettingsRow::switch_setting(
                "Sync",
                "",
                None,
                false,
                true,
                move |_| counter.set(counter.get() + 1),
            )],
            false,
        )
        .unwrap();
    match binder.views_mut().slots_mut()[0].handle_mut() {
        RenderHandle::SwitchSetting(view) => view.toggle_from_user(),
        _ => panic!("wrong handle variant"),
    }
    assert_eq!(count.get(), 1);
}
