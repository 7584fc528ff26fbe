//! Dataset de Amana Transportation (Kuala Lumpur)

use chrono::{NaiveDate, NaiveTime};

use crate::models::{
    BusRoute, BusStop, CompanyInfo, CurrentLocation, Dataset, Driver, Eta, Incident,
    IncidentKind, IncidentPriority, IncidentStatus, LatLng, Passengers, RouteId, RouteInfo,
    RouteStatus, StopId, VehicleInfo,
};

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

fn stop(id: StopId, name: &str, lat: f64, lng: f64, arrival: Eta, is_next_stop: bool) -> BusStop {
    BusStop {
        id,
        name: name.to_string(),
        position: LatLng::new(lat, lng),
        estimated_arrival: arrival,
        is_next_stop,
    }
}

fn location(lat: f64, lng: f64, address: &str) -> CurrentLocation {
    CurrentLocation {
        position: LatLng::new(lat, lng),
        address: address.to_string(),
    }
}

fn driver(name: &str, id: &str, shift_start: NaiveTime, shift_end: NaiveTime) -> Driver {
    Driver {
        name: name.to_string(),
        id: id.to_string(),
        shift_start,
        shift_end,
    }
}

fn incident(
    id: u32,
    kind: IncidentKind,
    description: &str,
    reported_by: &str,
    reported_time: NaiveTime,
    status: IncidentStatus,
    priority: IncidentPriority,
) -> Incident {
    Incident {
        id,
        kind,
        description: description.to_string(),
        reported_by: reported_by.to_string(),
        reported_time,
        status,
        priority,
    }
}

fn vehicle(plate: &str, model: &str, year: i32, fuel_level: u8, last_maintenance: NaiveDate) -> VehicleInfo {
    VehicleInfo {
        license_plate: plate.to_string(),
        model: model.to_string(),
        year,
        fuel_level,
        last_maintenance,
    }
}

fn route_info(distance_km: f64, speed_kmh: u32, completion: Eta, frequency_minutes: u32) -> RouteInfo {
    RouteInfo {
        total_distance_km: distance_km,
        average_speed_kmh: speed_kmh,
        estimated_completion: completion,
        frequency_minutes,
    }
}

fn company() -> CompanyInfo {
    CompanyInfo {
        name: "Amana Transportation".to_string(),
        founded: "2019".to_string(),
        headquarters: "Kuala Lumpur, Malaysia".to_string(),
        industry: "Public Transportation".to_string(),
        description: "Modern public bus service connecting key areas in Kuala Lumpur and surrounding regions, focused on reliability and passenger comfort.".to_string(),
    }
}

fn klcc_petaling_jaya() -> BusRoute {
    BusRoute {
        id: RouteId(1),
        name: "KLCC - Petaling Jaya Express".to_string(),
        route_number: "B101".to_string(),
        current_location: location(3.158, 101.711, "Jalan Ampang, near KLCC Twin Towers, Kuala Lumpur"),
        status: RouteStatus::Active,
        passengers: Passengers { current: 32, capacity: 45 },
        driver: driver("Ahmad Rahman", "DRV001", time(6, 0), time(18, 0)),
        bus_stops: vec![
            stop(1, "KLCC Station", 3.1578, 101.7114, Eta::at(14, 20), true),
            stop(2, "Pavilion KL", 3.149, 101.7101, Eta::at(14, 28), false),
            stop(3, "Mid Valley Megamall", 3.1177, 101.6774, Eta::at(14, 42), false),
            stop(4, "KL Sentral", 3.1338, 101.6869, Eta::at(14, 50), false),
            stop(5, "Universiti Malaya", 3.1204, 101.6535, Eta::at(15, 5), false),
            stop(6, "Petaling Jaya SS2", 3.1147, 101.624, Eta::at(15, 18), false),
            stop(7, "1 Utama Shopping Centre", 3.1502, 101.6154, Eta::at(15, 35), false),
        ],
        incidents: vec![incident(
            1,
            IncidentKind::Weather,
            "Flood on route",
            "Driver-1A",
            time(2, 6),
            IncidentStatus::Resolved,
            IncidentPriority::Low,
        )],
        vehicle_info: vehicle("WKL 2891", "Scania K230UB", 2019, 75, date(2024, 12, 1)),
        route_info: route_info(28.5, 25, Eta::at(16, 0), 20),
    }
}

fn old_town_mont_kiara() -> BusRoute {
    BusRoute {
        id: RouteId(2),
        name: "Old Town - Mont Kiara Connector".to_string(),
        route_number: "B205".to_string(),
        current_location: location(3.139, 101.6869, "KL Sentral Transportation Hub, Kuala Lumpur"),
        status: RouteStatus::Active,
        passengers: Passengers { current: 28, capacity: 40 },
        driver: driver("Siti Aminah", "DRV002", time(5, 30), time(17, 30)),
        bus_stops: vec![
            stop(1, "KL Sentral", 3.1338, 101.6869, Eta::at(14, 15), false),
            stop(2, "Central Market", 3.1427, 101.6964, Eta::at(14, 25), true),
            stop(3, "Chinatown", 3.1436, 101.6958, Eta::at(14, 30), false),
            stop(4, "Titiwangsa LRT", 3.1729, 101.7016, Eta::at(14, 45), false),
            stop(5, "Mont Kiara", 3.1727, 101.6509, Eta::at(15, 0), false),
            stop(6, "Sri Hartamas", 3.1653, 101.6493, Eta::at(15, 10), false),
        ],
        incidents: vec![incident(
            1,
            IncidentKind::Traffic,
            "Heavy traffic jam",
            "Driver-2A",
            time(17, 32),
            IncidentStatus::Resolved,
            IncidentPriority::High,
        )],
        vehicle_info: vehicle("WKL 1547", "Mercedes-Benz Citaro", 2020, 60, date(2024, 11, 28)),
        route_info: route_info(22.3, 22, Eta::at(15, 30), 25),
    }
}

fn airport_city_circle() -> BusRoute {
    BusRoute {
        id: RouteId(3),
        name: "Airport - City Circle".to_string(),
        route_number: "B350".to_string(),
        current_location: location(2.7456, 101.7072, "KLIA Express Station, Sepang, Selangor"),
        status: RouteStatus::Active,
        passengers: Passengers { current: 15, capacity: 50 },
        driver: driver("Lim Wei Ming", "DRV003", time(4, 0), time(16, 0)),
        bus_stops: vec![
            stop(1, "KLIA Terminal 1", 2.7456, 101.7072, Eta::at(14, 30), false),
            stop(2, "KLIA Terminal 2", 2.7389, 101.6997, Eta::at(14, 40), false),
            stop(3, "Putrajaya Central", 2.9264, 101.6964, Eta::at(15, 10), true),
            stop(4, "Cyberjaya", 2.9213, 101.6543, Eta::at(15, 25), false),
            stop(5, "Bandar Tun Razak", 3.0733, 101.7317, Eta::at(15, 55), false),
            stop(6, "KL City Centre", 3.1519, 101.7077, Eta::at(16, 20), false),
            stop(7, "Batu Caves", 3.2379, 101.684, Eta::at(16, 45), false),
            stop(8, "Gombak Terminal", 3.2642, 101.7003, Eta::at(17, 0), false),
        ],
        incidents: vec![incident(
            1,
            IncidentKind::Mechanical,
            "AC malfunction",
            "Driver-3A",
            time(15, 33),
            IncidentStatus::Resolved,
            IncidentPriority::Critical,
        )],
        vehicle_info: vehicle("WKL 3429", "Volvo B8RLE", 2018, 40, date(2024, 12, 3)),
        route_info: route_info(85.2, 35, Eta::at(17, 30), 45),
    }
}

fn university_express() -> BusRoute {
    BusRoute {
        id: RouteId(4),
        name: "University Express".to_string(),
        route_number: "B410".to_string(),
        current_location: location(3.1204, 101.6535, "Universiti Malaya Main Campus, Kuala Lumpur"),
        status: RouteStatus::Maintenance,
        passengers: Passengers { current: 0, capacity: 35 },
        driver: driver("Raj Kumar", "DRV004", time(6, 30), time(18, 30)),
        bus_stops: vec![
            stop(1, "Universiti Malaya", 3.1204, 101.6535, Eta::Unavailable, false),
            stop(2, "UCSI University", 3.0411, 101.7089, Eta::Unavailable, false),
            stop(3, "Taylor's University", 3.0653, 101.6075, Eta::Unavailable, false),
            stop(4, "Sunway University", 3.0653, 101.6037, Eta::Unavailable, false),
            stop(5, "INTI International University", 3.0534, 101.5934, Eta::Unavailable, false),
            stop(6, "Monash University Malaysia", 3.0653, 101.6016, Eta::Unavailable, false),
        ],
        incidents: vec![
            incident(
                1,
                IncidentKind::Weather,
                "Storm warning",
                "Driver-4A",
                time(1, 56),
                IncidentStatus::Resolved,
                IncidentPriority::High,
            ),
            incident(
                2,
                IncidentKind::Weather,
                "Storm warning",
                "Driver-4B",
                time(5, 17),
                IncidentStatus::Reported,
                IncidentPriority::High,
            ),
        ],
        vehicle_info: vehicle("WKL 7856", "Isuzu NPR", 2017, 85, date(2024, 12, 5)),
        route_info: route_info(45.8, 20, Eta::Unavailable, 30),
    }
}

fn shopping_district_shuttle() -> BusRoute {
    BusRoute {
        id: RouteId(5),
        name: "Shopping District Shuttle".to_string(),
        route_number: "B520".to_string(),
        current_location: location(3.149, 101.7101, "Pavilion Kuala Lumpur, Bukit Bintang"),
        status: RouteStatus::Active,
        passengers: Passengers { current: 42, capacity: 45 },
        driver: driver("Fatimah Zahra", "DRV005", time(7, 0), time(19, 0)),
        bus_stops: vec![
            stop(1, "Pavilion KL", 3.149, 101.7101, Eta::at(14, 22), false),
            stop(2, "Lot 10 Shopping Centre", 3.1479, 101.71, Eta::at(14, 25), true),
            stop(3, "Times Square KL", 3.1427, 101.7105, Eta::at(14, 32), false),
            stop(4, "Suria KLCC", 3.158, 101.7123, Eta::at(14, 40), false),
            stop(5, "Avenue K", 3.1612, 101.7197, Eta::at(14, 48), false),
            stop(6, "Intermark Mall", 3.1606, 101.7209, Eta::at(14, 52), false),
            stop(7, "Ampang Park LRT", 3.1615, 101.713, Eta::at(15, 0), false),
            stop(8, "Low Yat Plaza", 3.1468, 101.7099, Eta::at(15, 8), false),
            stop(9, "Fahrenheit 88", 3.1472, 101.7097, Eta::at(15, 12), false),
        ],
        incidents: vec![incident(
            1,
            IncidentKind::Passenger,
            "Lost item report",
            "Driver-5A",
            time(7, 8),
            IncidentStatus::Canceled,
            IncidentPriority::Low,
        )],
        vehicle_info: vehicle("WKL 9123", "BYD K9", 2021, 95, date(2024, 11, 30)),
        route_info: route_info(12.7, 15, Eta::at(15, 30), 15),
    }
}

/// Construir el dataset completo
pub fn build() -> Dataset {
    Dataset::new(
        company(),
        vec![
            klcc_petaling_jaya(),
            old_town_mont_kiara(),
            airport_city_circle(),
            university_express(),
            shopping_district_shuttle(),
        ],
    )
}
