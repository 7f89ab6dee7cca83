//! Built-in sample catalog.

use super::Catalog;
use crate::domain::{Category, Event, Location, Organizer};
use chrono::{DateTime, Duration, Utc};

struct SampleEvent {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    days_ahead: i64,
    venue: &'static str,
    city: &'static str,
    lat: f64,
    lng: f64,
    category: Category,
    price: f64,
    organizer: &'static str,
    contact: &'static str,
    rsvp_count: u32,
    is_popular: bool,
    tags: &'static [&'static str],
}

const SAMPLE_EVENTS: [SampleEvent; 6] = [
    SampleEvent {
        id: "1",
        title: "Wonderfruit Festival 2024",
        description: "A celebration of art, music, food and ideas to catalyze positive impact. Join us for a weekend of wonder in the fields of Siam Country Club.",
        days_ahead: 10,
        venue: "Siam Country Club",
        city: "Pattaya",
        lat: 12.9103,
        lng: 100.9976,
        category: Category::Music,
        price: 5500.0,
        organizer: "Scratch First",
        contact: "hello@wonderfruit.co",
        rsvp_count: 1240,
        is_popular: true,
        tags: &["Festival", "Eco", "Art"],
    },
    SampleEvent {
        id: "2",
        title: "Bangkok Art Biennale",
        description: "Experience contemporary art from around the world across various venues in Bangkok. The theme this year focuses on nurturing the soul.",
        days_ahead: 2,
        venue: "BACC",
        city: "Bangkok",
        lat: 13.7468,
        lng: 100.5351,
        category: Category::Arts,
        price: 0.0,
        organizer: "BACC Foundation",
        contact: "info@bacc.or.th",
        rsvp_count: 850,
        is_popular: true,
        tags: &["Gallery", "Exhibition"],
    },
    SampleEvent {
        id: "3",
        title: "Sunday Morning Yoga in the Park",
        description: "Start your Sunday with a refreshing Vinyasa flow at Lumpini Park. Open to all levels. Bring your own mat.",
        days_ahead: 1,
        venue: "Lumpini Park",
        city: "Bangkok",
        lat: 13.7314,
        lng: 100.5417,
        category: Category::Sports,
        price: 0.0,
        organizer: "Bangkok Wellness",
        contact: "yoga@bkwell.com",
        rsvp_count: 45,
        is_popular: false,
        tags: &["Yoga", "Wellness", "Outdoor"],
    },
    SampleEvent {
        id: "4",
        title: "Chiang Mai Coffee Week",
        description: "The biggest gathering of coffee lovers in the North. Taste beans from local growers and learn brewing techniques.",
        days_ahead: 15,
        venue: "One Nimman",
        city: "Chiang Mai",
        lat: 18.8000,
        lng: 98.9680,
        category: Category::Food,
        price: 100.0,
        organizer: "Northern Brews",
        contact: "brew@cmcoffee.com",
        rsvp_count: 2300,
        is_popular: true,
        tags: &["Coffee", "Market"],
    },
    SampleEvent {
        id: "5",
        title: "Full Moon Party",
        description: "The legendary beach party on Haad Rin. Fire shows, buckets, and dancing until sunrise.",
        days_ahead: 20,
        venue: "Haad Rin Beach",
        city: "Koh Phangan",
        lat: 9.6756,
        lng: 100.0633,
        category: Category::Nightlife,
        price: 200.0,
        organizer: "Phangan Events",
        contact: "party@phangan.com",
        rsvp_count: 5000,
        is_popular: true,
        tags: &["Party", "Beach"],
    },
    SampleEvent {
        id: "6",
        title: "Thai Cooking Masterclass",
        description: "Learn to cook authentic Pad Thai and Tom Yum Kung from a Michelin-star chef.",
        days_ahead: 5,
        venue: "Blue Elephant School",
        city: "Phuket",
        lat: 7.8804,
        lng: 98.3923,
        category: Category::Workshops,
        price: 2500.0,
        organizer: "Chef Somchai",
        contact: "somchai@cooking.com",
        rsvp_count: 12,
        is_popular: false,
        tags: &["Cooking", "Class"],
    },
];

impl SampleEvent {
    fn to_event(&self, index: usize, now: DateTime<Utc>) -> Event {
        let image = 1 + index;
        Event {
            id: self.id.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            start_date: now + Duration::days(self.days_ahead),
            end_date: None,
            location: Location {
                venue: self.venue.to_string(),
                city: self.city.to_string(),
                lat: self.lat,
                lng: self.lng,
            },
            category: self.category,
            image_url: format!("https://picsum.photos/800/600?random={image}"),
            price: self.price,
            currency: "THB".to_string(),
            organizer: Organizer {
                name: self.organizer.to_string(),
                avatar: format!("https://picsum.photos/100/100?random={}", 100 + image),
                contact: self.contact.to_string(),
            },
            rsvp_count: self.rsvp_count,
            is_popular: Some(self.is_popular),
            tags: self.tags.iter().map(|t| (*t).to_string()).collect(),
        }
    }
}

impl Catalog {
    /// The six sample events, with start dates relative to the current time.
    #[must_use]
    pub fn sample() -> Self {
        Self::sample_at(Utc::now())
    }

    /// The six sample events, with start dates offset from `now`.
    ///
    /// Ids are `"1"` through `"6"` in catalog order; the Bangkok Art Biennale
    /// (`"2"`) and the yoga session (`"3"`) are free.
    #[must_use]
    pub fn sample_at(now: DateTime<Utc>) -> Self {
        let events = SAMPLE_EVENTS
            .iter()
            .enumerate()
            .map(|(index, sample)| sample.to_event(index, now))
            .collect();
        Self { events }
    }
}
