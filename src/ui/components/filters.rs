//! Category rail and city picker renderers.

use crate::domain::{Category, CategoryFilter, CityFilter, CITIES};

fn entry(label: String, active: bool) -> String {
    if active {
        format!("[{label}]")
    } else {
        label
    }
}

/// Renders "All Events" followed by every category with its icon. The active
/// entry is bracketed.
#[must_use]
pub fn render_category_rail(active: CategoryFilter) -> String {
    let all = entry("All Events".to_string(), active == CategoryFilter::All);
    let categories = Category::ALL.into_iter().map(|category| {
        entry(
            format!("{} {}", category.icon(), category.label()),
            active == CategoryFilter::Only(category),
        )
    });

    std::iter::once(all)
        .chain(categories)
        .collect::<Vec<_>>()
        .join("  ")
}

/// Renders the city options. A selected city outside the known list is
/// appended so the active choice is always visible.
#[must_use]
pub fn render_city_options(active: &CityFilter) -> String {
    let mut options = vec![entry("All Cities".to_string(), *active == CityFilter::All)];
    options.extend(CITIES.iter().map(|&city| {
        let selected = matches!(active, CityFilter::Only(name) if name.as_str() == city);
        entry(city.to_string(), selected)
    }));

    if let CityFilter::Only(city) = active {
        if !CITIES.contains(&city.as_str()) {
            options.push(entry(city.clone(), true));
        }
    }

    format!("City: {}", options.join("  "))
}
