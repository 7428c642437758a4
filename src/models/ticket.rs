use serde::{Deserialize, Serialize};

/// A booked seat record linking a passenger to a flight. Fetched fresh on
/// every confirmation page load, never mutated client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub ticket_id: String,
    pub seat_number: String,
    pub passenger_name: String,
    pub passenger_surname: String,
    pub passenger_email: String,
    pub booking_date: String,
    // The backend embeds the populated flight document under its foreign-key
    // field name.
    #[serde(rename = "flight_id")]
    pub flight: Flight,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    pub flight_id: String,
    pub price: f64,
    pub departure_time: String,
    pub arrival_time: String,
    pub from_city: City,
    pub to_city: City,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub city_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICKET_JSON: &str = r#"{
        "ticket_id": "TK-1042",
        "seat_number": "12A",
        "passenger_name": "Ada",
        "passenger_surname": "Yilmaz",
        "passenger_email": "ada@example.com",
        "booking_date": "2024-03-10T09:15:00Z",
        "flight_id": {
            "flight_id": "SK-204",
            "price": 1450.0,
            "departure_time": "2024-03-15T14:30:00Z",
            "arrival_time": "2024-03-15T16:05:00Z",
            "from_city": { "city_name": "Istanbul" },
            "to_city": { "city_name": "Ankara" }
        }
    }"#;

    #[test]
    fn ticket_deserializes_every_field() {
        let ticket: Ticket = serde_json::from_str(TICKET_JSON).unwrap();
        assert_eq!(ticket.ticket_id, "TK-1042");
        assert_eq!(ticket.seat_number, "12A");
        assert_eq!(ticket.passenger_name, "Ada");
        assert_eq!(ticket.passenger_surname, "Yilmaz");
        assert_eq!(ticket.passenger_email, "ada@example.com");
        assert_eq!(ticket.booking_date, "2024-03-10T09:15:00Z");
    }

    #[test]
    fn flight_is_embedded_under_foreign_key_field() {
        let ticket: Ticket = serde_json::from_str(TICKET_JSON).unwrap();
        assert_eq!(ticket.flight.flight_id, "SK-204");
        assert_eq!(ticket.flight.price, 1450.0);
        assert_eq!(ticket.flight.from_city.city_name, "Istanbul");
        assert_eq!(ticket.flight.to_city.city_name, "Ankara");
        assert_eq!(ticket.flight.departure_time, "2024-03-15T14:30:00Z");
        assert_eq!(ticket.flight.arrival_time, "2024-03-15T16:05:00Z");
    }
}
