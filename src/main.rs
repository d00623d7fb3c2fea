// src/main.rs
use nannou::prelude::*;

use routevis::{
    config::Config,
    controllers::{RouteAnnouncer, RouteEvent, RouteListener},
    draw::{grid_draw, hex_to_rgba, path_draw, DrawParams},
    models::Board,
    services::{Applied, EditorAction, EditorState, Phase, RouteStore},
    views::{GridView, ToastManager},
};

// toast colors, one per event kind
const SAVED_COLOR: (f32, f32, f32) = (0.204, 0.596, 0.859);
const DELETED_COLOR: (f32, f32, f32) = (0.753, 0.224, 0.169);
const OK_COLOR: (f32, f32, f32) = (0.153, 0.682, 0.376);
const ERROR_COLOR: (f32, f32, f32) = (0.906, 0.298, 0.235);

struct Model {
    // Core components:
    board: Board,
    editor: EditorState,
    store: Option<RouteStore>,
    route_id: Option<u64>,
    route_name: String,

    // Comms components:
    announcer: Option<RouteAnnouncer>,
    listener: Option<RouteListener>,

    // Presentation:
    grid_view: GridView,
    params: DrawParams,
    background: Rgba,
    cell_gap: f32,
    toast: ToastManager,

    // Interaction:
    pending_clear: bool,
}

fn main() {
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    // Load config
    let config = Config::load().expect("Failed to load config file");

    // Create window
    let window_id = app
        .new_window()
        .title("routevis 0.1.0")
        .size(config.window.width, config.window.height)
        .view(view)
        .key_pressed(key_pressed)
        .mouse_pressed(mouse_pressed)
        .mouse_moved(mouse_moved)
        .build()
        .unwrap();
    let _window = app.window(window_id).unwrap();

    let defaults = DrawParams::default();
    let params = DrawParams {
        cell_color: hex_to_rgba(&config.style.cell, 1.0).unwrap_or(defaults.cell_color),
        route_alpha: config.style.route_alpha,
        preview_alpha: config.style.preview_alpha,
        fallback_color: hex_to_rgba(&config.style.fallback_color, 1.0)
            .unwrap_or(defaults.fallback_color),
    };
    let background =
        hex_to_rgba(&config.style.background, 1.0).unwrap_or(rgba(0.0, 0.0, 0.0, 1.0));

    let mut toast = ToastManager::new();

    // Load the board; a failed load keeps the defaults and surfaces the
    // error instead of leaving a half-populated board.
    let board = match RouteStore::load_board(config.resolve_board_path()) {
        Ok(board) => board,
        Err(e) => {
            eprintln!("board load failed: {}", e);
            toast.show("Board load failed", error_color(), app.time);
            Board::empty()
        }
    };

    let store = match RouteStore::new(config.resolve_store_dir()) {
        Ok(store) => Some(store),
        Err(e) => {
            eprintln!("route store unavailable: {}", e);
            None
        }
    };

    // Route bootstrap: reopen the saved path for this board, if any.
    let mut editor = EditorState::new();
    let mut route_id = None;
    let mut route_name = config.route.default_name.clone();
    if let Some(store) = &store {
        match store.find_route_for_board(board.id) {
            Ok(Some(record)) => {
                editor = EditorState::from_route(record.path_points(), &board);
                route_id = Some(record.id);
                route_name = record.name;
            }
            Ok(None) => {}
            Err(e) => {
                eprintln!("route load failed: {}", e);
                toast.show("Route load failed", error_color(), app.time);
            }
        }
    }

    let announcer = RouteAnnouncer::new(config.osc.tx_port)
        .map_err(|e| eprintln!("OSC sender unavailable: {}", e))
        .ok();
    let listener = RouteListener::new(config.osc.rx_port)
        .map_err(|e| eprintln!("OSC receiver unavailable: {}", e))
        .ok();

    let grid_view = GridView::fit(board.rows, board.cols, app.window_rect(), config.style.cell_gap);

    Model {
        board,
        editor,
        store,
        route_id,
        route_name,

        announcer,
        listener,

        grid_view,
        params,
        background,
        cell_gap: config.style.cell_gap,
        toast,

        pending_clear: false,
    }
}

fn update(app: &App, model: &mut Model, _update: Update) {
    // track window resizes
    model.grid_view = GridView::fit(
        model.board.rows,
        model.board.cols,
        app.window_rect(),
        model.cell_gap,
    );

    // announcements from other viewers
    if let Some(listener) = &mut model.listener {
        for event in listener.poll() {
            match event {
                RouteEvent::Saved { name, board_id, .. } => {
                    let msg = format!("Route \"{}\" saved on board {}", name, board_id);
                    model.toast.show(&msg, tuple_color(SAVED_COLOR), app.time);
                }
                RouteEvent::Deleted { name, .. } => {
                    let msg = format!("Route \"{}\" deleted", name);
                    model.toast.show(&msg, tuple_color(DELETED_COLOR), app.time);
                }
            }
        }
    }
}

fn mouse_moved(_app: &App, model: &mut Model, pos: Point2) {
    if let Some((row, col)) = model.grid_view.hit_test(pos) {
        // only meaningful while building; rejected hovers keep the old preview
        model
            .editor
            .apply(EditorAction::HoverPreview { row, col }, &model.board);
    }
}

fn mouse_pressed(app: &App, model: &mut Model, button: MouseButton) {
    match button {
        MouseButton::Right => {
            // right click undoes the last step
            model.pending_clear = false;
            model.editor.apply(EditorAction::UndoLast, &model.board);
        }
        MouseButton::Left => {
            let pos = app.mouse.position();
            let Some((row, col)) = model.grid_view.hit_test(pos) else {
                return;
            };
            handle_cell_click(app, model, row, col);
        }
        _ => {}
    }
}

fn handle_cell_click(app: &App, model: &mut Model, row: u32, col: u32) {
    match model.editor.phase {
        Phase::Idle => {
            model
                .editor
                .apply(EditorAction::StartPath { row, col }, &model.board);
        }
        Phase::Building => {
            let applied = model
                .editor
                .apply(EditorAction::ExtendPath { row, col }, &model.board);
            if applied == Applied::Completed {
                model.toast.show(
                    "Path complete - press S to save",
                    tuple_color(OK_COLOR),
                    app.time,
                );
            }
        }
        Phase::Finished => {
            if model.editor.is_path_cell(row, col) {
                model.pending_clear = true;
                model.toast.show(
                    "Delete this path? Y to confirm, N to cancel",
                    error_color(),
                    app.time,
                );
            }
        }
    }
}

fn key_pressed(app: &App, model: &mut Model, key: Key) {
    match key {
        Key::Y if model.pending_clear => {
            model.pending_clear = false;
            confirm_delete(app, model);
        }
        Key::N | Key::Escape => {
            model.pending_clear = false;
        }
        Key::U => {
            model.pending_clear = false;
            model.editor.apply(EditorAction::UndoLast, &model.board);
        }
        Key::C => {
            if !model.editor.points.is_empty() {
                model.pending_clear = true;
                model.toast.show(
                    "Delete this path? Y to confirm, N to cancel",
                    error_color(),
                    app.time,
                );
            }
        }
        Key::S => {
            save_route(app, model);
        }
        _ => {}
    }
}

fn confirm_delete(app: &App, model: &mut Model) {
    model.editor.apply(EditorAction::ClearAll, &model.board);
    if let Some(id) = model.route_id.take() {
        if let Some(store) = &model.store {
            if let Err(e) = store.delete_route(id) {
                eprintln!("route delete failed: {}", e);
            }
        }
        if let Some(announcer) = &model.announcer {
            announcer.send_route_deleted(id, &model.route_name);
        }
    }
    model
        .toast
        .show("Path deleted", tuple_color(DELETED_COLOR), app.time);
}

fn save_route(app: &App, model: &mut Model) {
    // saving is only allowed on a finished path; the attempt itself is
    // surfaced, unlike silently-ignored invalid clicks
    if !model.editor.can_save() {
        model.toast.show(
            "Finish the path first (connect both dots)",
            error_color(),
            app.time,
        );
        return;
    }
    let Some(store) = &model.store else {
        model
            .toast
            .show("Route store unavailable", error_color(), app.time);
        return;
    };

    let name = model.route_name.trim();
    let name = if name.is_empty() { "Route" } else { name };

    match store.save_route(model.route_id, name, model.board.id, &model.editor.points) {
        Ok(id) => {
            model.route_id = Some(id);
            if let Some(announcer) = &model.announcer {
                announcer.send_route_saved(id, name, model.board.id);
            }
            model
                .toast
                .show("Route saved", tuple_color(OK_COLOR), app.time);
        }
        Err(e) => {
            // the drawn path is kept; the user may retry without redrawing
            let msg = format!("Save failed: {}", e);
            model.toast.show(&msg, error_color(), app.time);
        }
    }
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let win = app.window_rect();

    draw.background().color(model.background);

    grid_draw::draw_board(&draw, &model.board, &model.grid_view, &model.params);
    path_draw::draw_path(&draw, &model.editor, &model.grid_view, &model.params);

    // HUD: phase plus the ordered point readout
    let phase = match model.editor.phase {
        Phase::Idle => "idle",
        Phase::Building => "building",
        Phase::Finished => "finished",
    };
    let points = model.editor.point_labels().join(" ");
    let hud = format!("{} | {} | {}", model.route_name, phase, points);
    draw.text(&hud)
        .x_y(0.0, win.top() - 16.0)
        .w_h(win.w() - 20.0, 24.0)
        .font_size(14)
        .color(WHITE);

    model.toast.draw(&draw, win, app.time);

    draw.to_frame(app, &frame).unwrap();
}

fn error_color() -> Rgba {
    tuple_color(ERROR_COLOR)
}

fn tuple_color((r, g, b): (f32, f32, f32)) -> Rgba {
    rgba(r, g, b, 1.0)
}
