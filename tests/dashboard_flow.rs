use amana_dashboard::config::{AppConfig, FitOptions, MapConfig, PolylineStyle};
use amana_dashboard::data::dataset;
use amana_dashboard::models::{LatLng, RouteId};
use amana_dashboard::services::{MapAdapter, MapSurface, MarkerSpec};
use amana_dashboard::utils::AppResult;
use amana_dashboard::viewmodels::{
    route_buttons, DashboardAction, DashboardState, DisplayMode, ScheduleView,
};

/// Superficie mínima: capas vivas y última vista
#[derive(Default)]
struct FakeSurface {
    next: usize,
    live: Vec<usize>,
    open_popups: usize,
    view: Option<(LatLng, u8)>,
    fit: Option<FitOptions>,
}

impl FakeSurface {
    fn add(&mut self) -> usize {
        self.next += 1;
        self.live.push(self.next);
        self.next
    }
}

impl MapSurface for FakeSurface {
    type Layer = usize;

    fn mount(_config: &MapConfig) -> AppResult<Self> {
        Ok(Self::default())
    }

    fn add_polyline(&mut self, _path: &[LatLng], _style: &PolylineStyle) -> AppResult<usize> {
        Ok(self.add())
    }

    fn add_marker(&mut self, marker: &MarkerSpec) -> AppResult<usize> {
        if marker.popup.open {
            self.open_popups += 1;
        }
        Ok(self.add())
    }

    fn remove_layer(&mut self, layer: usize) {
        self.live.retain(|id| *id != layer);
    }

    fn fit_bounds(&mut self, _points: &[LatLng], options: &FitOptions) -> AppResult<()> {
        self.fit = Some(*options);
        Ok(())
    }

    fn set_view(&mut self, center: LatLng, zoom: u8) -> AppResult<()> {
        self.view = Some((center, zoom));
        Ok(())
    }
}

#[test]
fn test_initial_page_shows_b101() {
    let state = DashboardState::initial(dataset());
    let route = state.selected_route(dataset());

    let buttons = route_buttons(&dataset().bus_lines, state.selected);
    assert!(buttons[0].selected);
    assert_eq!(buttons[0].label, "B101 (Active)");

    let schedule = ScheduleView::for_route(route);
    let first = &schedule.rows()[0];
    assert_eq!(first.name, "KLCC Station");
    assert_eq!(first.arrival, "14:20");
    assert_eq!(schedule.highlighted().len(), 1);
}

#[test]
fn test_select_maintenance_route() {
    let config = AppConfig::default();
    let mut map: MapAdapter<FakeSurface> = MapAdapter::mount(config.map.clone()).unwrap();

    let state = DashboardState::initial(dataset());
    map.show(state.selected_route(dataset())).unwrap();

    let state = state.apply(DashboardAction::Select(RouteId(4)), dataset());
    let route = state.selected_route(dataset());
    map.show(route).unwrap();

    let counts = map.overlay_counts();
    assert_eq!(counts.vehicles, 0);
    assert_eq!(counts.stops, 6);
    assert_eq!(counts.total(), 7);

    let schedule = ScheduleView::for_route(route);
    assert!(schedule.rows().iter().all(|row| row.arrival == "N/A"));
    assert!(schedule.highlighted().is_empty());
}

#[test]
fn test_active_route_fits_bounds_and_opens_vehicle_popup() {
    let mut map: MapAdapter<FakeSurface> = MapAdapter::mount(MapConfig::default()).unwrap();
    map.show(dataset().route_by_number("B350")).unwrap();

    assert_eq!(map.overlay_counts().total(), 1 + 8 + 1);
    assert_eq!(map.surface().live.len(), 10);
    assert_eq!(map.surface().open_popups, 1);
    assert_eq!(
        map.surface().fit,
        Some(FitOptions {
            padding: [50, 50],
            max_zoom: 14,
        })
    );
}

#[test]
fn test_deselect_clears_map_and_schedule() {
    let mut map: MapAdapter<FakeSurface> = MapAdapter::mount(MapConfig::default()).unwrap();
    let state = DashboardState::initial(dataset());
    map.show(state.selected_route(dataset())).unwrap();

    let state = state.apply(DashboardAction::ClearSelection, dataset());
    map.show(state.selected_route(dataset())).unwrap();

    assert_eq!(map.overlay_counts().total(), 0);
    assert!(map.surface().live.is_empty());
    assert_eq!(
        map.surface().view,
        Some((LatLng::new(3.140853, 101.693207), 12))
    );
    assert_eq!(
        ScheduleView::for_route(state.selected_route(dataset())),
        ScheduleView::Empty
    );
    assert!(route_buttons(&dataset().bus_lines, state.selected)
        .iter()
        .all(|button| !button.selected));
}

#[test]
fn test_unknown_selection_keeps_previous_route() {
    let state = DashboardState::initial(dataset());
    let next = state.apply(DashboardAction::Select(RouteId(99)), dataset());
    assert_eq!(next.selected, Some(RouteId(1)));
}

#[test]
fn test_display_mode_round_trip() {
    let state = DashboardState::initial(dataset());
    let dark = state.apply(DashboardAction::ToggleMode, dataset());
    assert_eq!(dark.mode, DisplayMode::Dark);
    assert_eq!(dark.selected, state.selected);

    let light = dark.apply(DashboardAction::ToggleMode, dataset());
    assert_eq!(light, state);
}
