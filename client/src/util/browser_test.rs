#![cfg(not(feature = "hydrate"))]

use std::cell::Cell;
use std::rc::Rc;

use super::*;

#[test]
fn spawn_browser_drops_future_unpolled() {
    let ran = Rc::new(Cell::new(false));
    let flag = ran.clone();
    spawn_browser(async move { flag.set(true) });
    assert!(!ran.get());
}

#[test]
fn confirm_is_false_off_browser() {
    assert!(!confirm("Delete this campaign?"));
}
