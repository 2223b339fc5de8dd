// Gallery index cycling, control visibility, and the mode details modal.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use modedeck::action::Action;
use modedeck::catalog::models::ModeRecord;
use modedeck::components::mode_modal::{ModalLayout, ModeModal, THUMB_WIDTH};
use modedeck::components::Component;
use modedeck::gallery::Gallery;
use ratatui::layout::Rect;
use tokio::sync::mpsc;

// ── Helpers ──────────────────────────────────────────────────────────────────

fn images(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("img/{i}.png")).collect()
}

fn mode(name: &str, image_count: usize) -> ModeRecord {
    ModeRecord {
        name: name.to_string(),
        description: format!("{name} description"),
        link: format!("https://example.com/{}", name.to_lowercase()),
        images: (1..=image_count)
            .map(|i| format!("img/{}-{i}.png", name.to_lowercase()))
            .collect(),
    }
}

fn make_key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn modal_with_channel() -> (ModeModal, mpsc::UnboundedReceiver<Action>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let mut modal = ModeModal::new();
    modal.register_action_handler(tx);
    (modal, rx)
}

const SCREEN: Rect = Rect {
    x: 0,
    y: 0,
    width: 100,
    height: 30,
};

// ── Gallery ──────────────────────────────────────────────────────────────────

#[test]
fn test_gallery_starts_at_first_image() {
    let g = Gallery::new(images(3));
    assert_eq!(g.current_index(), 0);
    assert_eq!(g.current_image(), Some("img/1.png"));
}

#[test]
fn test_gallery_next_k_times_returns_to_start() {
    for k in 1..=6 {
        let mut g = Gallery::new(images(k));
        for _ in 0..k {
            g.next();
        }
        assert_eq!(g.current_index(), 0, "k = {k}");
    }
}

#[test]
fn test_gallery_prev_from_zero_wraps_to_last() {
    let mut g = Gallery::new(images(4));
    g.prev();
    assert_eq!(g.current_index(), 3);
    assert_eq!(g.current_image(), Some("img/4.png"));
}

#[test]
fn test_gallery_next_from_last_wraps_to_zero() {
    let mut g = Gallery::new(images(3));
    g.select(2);
    g.next();
    assert_eq!(g.current_index(), 0);
}

#[test]
fn test_gallery_select_ignores_out_of_range() {
    let mut g = Gallery::new(images(3));
    assert!(g.select(1));
    assert!(!g.select(3));
    assert_eq!(g.current_index(), 1);
}

#[test]
fn test_gallery_exactly_one_active_thumbnail() {
    let mut g = Gallery::new(images(5));
    g.next();
    g.next();
    let active: Vec<usize> = (0..g.len()).filter(|&i| g.is_active(i)).collect();
    assert_eq!(active, vec![2]);
}

#[test]
fn test_gallery_controls_visibility() {
    assert!(!Gallery::new(images(1)).controls_visible());
    assert!(Gallery::new(images(2)).controls_visible());
    assert!(Gallery::new(images(7)).controls_visible());
}

#[test]
fn test_empty_gallery_is_inert() {
    let mut g = Gallery::new(vec![]);
    g.next();
    g.prev();
    assert_eq!(g.current_index(), 0);
    assert_eq!(g.current_image(), None);
    assert!(!g.controls_visible());
    assert!(!g.is_active(0));
    assert_eq!(g.thumb_window(5), 0..0);
}

#[test]
fn test_thumb_window_follows_active_thumbnail() {
    let mut g = Gallery::new(images(10));
    assert_eq!(g.thumb_window(4), 0..4);
    g.select(5);
    assert_eq!(g.thumb_window(4), 3..7);
    g.select(9);
    assert_eq!(g.thumb_window(4), 6..10);
    assert_eq!(g.thumb_window(20), 0..10);
}

// ── Modal state ──────────────────────────────────────────────────────────────

#[test]
fn test_modal_open_populates_detail_and_gallery() {
    let mut modal = ModeModal::new();
    assert!(!modal.is_visible());

    modal.open(&mode("Ranked", 3));
    assert!(modal.is_visible());
    let detail = modal.detail().unwrap();
    assert_eq!(detail.name, "Ranked");
    assert_eq!(detail.description, "Ranked description");
    assert_eq!(detail.link, "https://example.com/ranked");
    assert_eq!(modal.gallery().len(), 3);
    assert_eq!(modal.gallery().current_image(), Some("img/ranked-1.png"));
}

#[test]
fn test_modal_reopen_replaces_gallery_state() {
    let mut modal = ModeModal::new();
    modal.open(&mode("Ranked", 3));
    modal.update(&Action::GalleryNext).unwrap();
    modal.update(&Action::GalleryNext).unwrap();
    assert_eq!(modal.gallery().current_index(), 2);

    modal.close();
    modal.open(&mode("Duo", 2));
    assert_eq!(modal.gallery().current_index(), 0);
    assert_eq!(modal.gallery().len(), 2);
    assert_eq!(modal.gallery().current_image(), Some("img/duo-1.png"));
}

#[test]
fn test_modal_close_hides() {
    let mut modal = ModeModal::new();
    modal.open(&mode("Ranked", 1));
    modal.close();
    assert!(!modal.is_visible());
}

#[test]
fn test_modal_ignores_gallery_actions_when_closed() {
    let mut modal = ModeModal::new();
    modal.open(&mode("Ranked", 3));
    modal.close();
    modal.update(&Action::GalleryNext).unwrap();
    assert_eq!(modal.gallery().current_index(), 0);
}

#[test]
fn test_modal_gallery_actions() {
    let mut modal = ModeModal::new();
    modal.open(&mode("Ranked", 4));
    modal.update(&Action::GalleryPrev).unwrap();
    assert_eq!(modal.gallery().current_index(), 3);
    modal.update(&Action::GalleryNext).unwrap();
    assert_eq!(modal.gallery().current_index(), 0);
    modal.update(&Action::GallerySelect(2)).unwrap();
    assert_eq!(modal.gallery().current_index(), 2);
}

// ── Modal keys ───────────────────────────────────────────────────────────────

#[test]
fn test_modal_keys_send_actions() {
    let (mut modal, mut rx) = modal_with_channel();
    modal.open(&mode("Ranked", 3));

    modal.handle_key_event(make_key(KeyCode::Right)).unwrap();
    modal.handle_key_event(make_key(KeyCode::Char('h'))).unwrap();
    modal.handle_key_event(make_key(KeyCode::Char('3'))).unwrap();
    modal.handle_key_event(make_key(KeyCode::End)).unwrap();
    modal.handle_key_event(make_key(KeyCode::Esc)).unwrap();

    let sent: Vec<Action> = std::iter::from_fn(|| rx.try_recv().ok()).collect();
    assert_eq!(
        sent,
        vec![
            Action::GalleryNext,
            Action::GalleryPrev,
            Action::GallerySelect(2),
            Action::GallerySelect(2),
            Action::CloseModal,
        ]
    );
}

#[test]
fn test_modal_consumes_keys_only_when_visible() {
    let (mut modal, _rx) = modal_with_channel();
    assert!(!modal.handle_key_event(make_key(KeyCode::Esc)).unwrap());
    modal.open(&mode("Ranked", 1));
    assert!(modal.handle_key_event(make_key(KeyCode::Char('x'))).unwrap());
}

// ── Modal mouse ──────────────────────────────────────────────────────────────

#[test]
fn test_click_on_scrim_closes() {
    let (mut modal, mut rx) = modal_with_channel();
    modal.open(&mode("Ranked", 3));
    let layout = ModalLayout::new(SCREEN);
    assert!(layout.overlay.x > 0);

    modal.handle_mouse_event(click(0, 0), SCREEN).unwrap();
    assert_eq!(rx.try_recv().ok(), Some(Action::CloseModal));
}

#[test]
fn test_click_on_close_control_closes() {
    let (mut modal, mut rx) = modal_with_channel();
    modal.open(&mode("Ranked", 3));
    let layout = ModalLayout::new(SCREEN);

    modal
        .handle_mouse_event(click(layout.close.x + 1, layout.close.y), SCREEN)
        .unwrap();
    assert_eq!(rx.try_recv().ok(), Some(Action::CloseModal));
}

#[test]
fn test_click_inside_modal_body_does_not_close() {
    let (mut modal, mut rx) = modal_with_channel();
    modal.open(&mode("Ranked", 3));
    let layout = ModalLayout::new(SCREEN);

    modal
        .handle_mouse_event(click(layout.description.x + 2, layout.description.y), SCREEN)
        .unwrap();
    assert!(rx.try_recv().is_err());
}

#[test]
fn test_click_on_arrows() {
    let (mut modal, mut rx) = modal_with_channel();
    modal.open(&mode("Ranked", 3));
    let layout = ModalLayout::new(SCREEN);

    modal
        .handle_mouse_event(click(layout.prev.x + 1, layout.prev.y + 1), SCREEN)
        .unwrap();
    modal
        .handle_mouse_event(click(layout.next.x + 1, layout.next.y + 1), SCREEN)
        .unwrap();
    assert_eq!(rx.try_recv().ok(), Some(Action::GalleryPrev));
    assert_eq!(rx.try_recv().ok(), Some(Action::GalleryNext));
}

#[test]
fn test_arrows_inactive_for_single_image() {
    let (mut modal, mut rx) = modal_with_channel();
    modal.open(&mode("Solo", 1));
    let layout = ModalLayout::new(SCREEN);

    modal
        .handle_mouse_event(click(layout.next.x + 1, layout.next.y + 1), SCREEN)
        .unwrap();
    assert!(rx.try_recv().is_err());
}

#[test]
fn test_click_on_thumbnail_selects_it() {
    let (mut modal, mut rx) = modal_with_channel();
    modal.open(&mode("Ranked", 4));
    let layout = ModalLayout::new(SCREEN);

    let column = layout.thumbnails.x + 2 * THUMB_WIDTH + 1;
    modal
        .handle_mouse_event(click(column, layout.thumbnails.y), SCREEN)
        .unwrap();
    assert_eq!(rx.try_recv().ok(), Some(Action::GallerySelect(2)));
}

#[test]
fn test_click_past_last_thumbnail_selects_nothing() {
    let (mut modal, mut rx) = modal_with_channel();
    modal.open(&mode("Ranked", 2));
    let layout = ModalLayout::new(SCREEN);

    let column = layout.thumbnails.x + 5 * THUMB_WIDTH;
    modal
        .handle_mouse_event(click(column, layout.thumbnails.y), SCREEN)
        .unwrap();
    assert!(rx.try_recv().is_err());
}

#[test]
fn test_modal_layout_fits_screen() {
    let layout = ModalLayout::new(SCREEN);
    assert!(layout.overlay.width <= SCREEN.width);
    assert!(layout.overlay.height <= SCREEN.height);
    assert!(layout.thumb_capacity() >= 4);
    assert!(layout.main_image.width > 0);
}
