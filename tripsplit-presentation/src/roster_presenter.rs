use std::fmt::Write as _;
use tripsplit_domain::{Trip, TripId};
use tripsplit_i18n as i18n;

/// Listings of trips, people and categories.
pub struct RosterPresenter;

impl RosterPresenter {
    pub fn render_trips(trips: &[Trip], current: Option<&TripId>) -> String {
        if trips.is_empty() {
            return format!("{}\n", i18n::NO_TRIPS);
        }

        let mut reply = String::with_capacity(trips.len() * 48);
        for trip in trips {
            let marker = if Some(&trip.id) == current {
                format!(" {}", i18n::CURRENT_MARKER)
            } else {
                String::new()
            };
            let _ = write!(&mut reply, "- {} [{}]{marker}", trip.name, trip.id);
            if let Some(start) = trip.start_date {
                let _ = write!(&mut reply, " {}", start.format("%d/%m/%Y"));
            }
            let _ = writeln!(&mut reply);
        }
        reply
    }

    pub fn render_people(trip: &Trip) -> String {
        if trip.people.is_empty() {
            return format!("{}\n", i18n::NO_PEOPLE);
        }

        let mut reply = String::with_capacity(trip.people.len() * 48);
        for person in &trip.people {
            match person.email.as_deref().filter(|email| !email.trim().is_empty()) {
                Some(email) => {
                    let _ = writeln!(&mut reply, "- {} <{email}> [{}]", person.name, person.id);
                }
                None => {
                    let _ = writeln!(&mut reply, "- {} [{}]", person.name, person.id);
                }
            }
        }
        reply
    }

    pub fn render_categories(trip: &Trip) -> String {
        if trip.categories.is_empty() {
            return format!("{}\n", i18n::NO_CATEGORIES);
        }

        let mut reply = String::with_capacity(trip.categories.len() * 32);
        for category in &trip.categories {
            let _ = writeln!(
                &mut reply,
                "- {} {} [{}]",
                category.icon, category.name, category.id
            );
        }
        reply
    }
}
