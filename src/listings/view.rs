//! Server-rendered views for the listings pages
//!
//! Rendering is a pure function of the fetch state: a loading indicator, an
//! error message as the sole content, an explicit "no results" notice for an
//! empty ready set, or one summary card per listing in server-supplied order.
//! Optional listing fields are omitted from cards, never rendered as "0" or
//! a placeholder.

use crate::listings::money::format_price;
use crate::listings::FetchState;
use crate::models::{average_rating, Listing, PropertyType, Review};
use crate::search::SearchForm;

const CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
body{background:#f9fafb;color:#111827;font-family:system-ui,sans-serif}
a{color:#4f46e5;text-decoration:none}a:hover{text-decoration:underline}
.nav{background:#fff;border-bottom:1px solid #e5e7eb;padding:0.75rem 2rem}
.nav h1{font-size:1.2rem;display:inline}.nav a{margin-left:1.5rem;color:#6b7280}
.container{max-width:1100px;margin:0 auto;padding:1.5rem}
.grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(320px,1fr));gap:1.25rem;margin-top:1.5rem}
.card{background:#fff;border:1px solid #e5e7eb;border-radius:8px;padding:1.25rem}
.card .price{color:#4f46e5;font-size:1.3rem;font-weight:700}
.card .price small{color:#6b7280;font-weight:400}
.card h3{margin:0.4rem 0 0.2rem;font-size:1.05rem}
.card .address{color:#6b7280;font-size:0.9rem}
.specs{display:flex;gap:1rem;margin:0.6rem 0;color:#374151;font-size:0.9rem}
.badges{display:flex;gap:0.4rem;flex-wrap:wrap}
.badge{background:#eef2ff;color:#4338ca;padding:2px 8px;border-radius:4px;font-size:0.75rem}
.badge.status{background:#ecfdf5;color:#047857}
.notice{margin-top:2rem;text-align:center;color:#6b7280}
.notice.error{color:#dc2626}
.search{background:#fff;border:1px solid #e5e7eb;border-radius:8px;padding:1.25rem;display:grid;grid-template-columns:repeat(auto-fit,minmax(160px,1fr));gap:0.75rem}
.search label{display:block;font-size:0.8rem;color:#6b7280;margin-bottom:0.2rem}
.search input,.search select{width:100%;padding:0.4rem;border:1px solid #d1d5db;border-radius:6px}
.search .checks{grid-column:1/-1;display:flex;gap:1.25rem}
.search button{grid-column:1/-1;background:#4f46e5;color:#fff;border:none;padding:0.55rem;border-radius:6px;cursor:pointer}
.review{border-bottom:1px solid #e5e7eb;padding:0.75rem 0}
.review .meta{color:#6b7280;font-size:0.85rem}
.stars{color:#f0c000}
"#;

fn esc(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html><html><head><meta charset="utf-8"><meta name="viewport" content="width=device-width,initial-scale=1">
<title>{title} — Nyumba</title><style>{CSS}</style></head>
<body><nav class="nav"><h1>Nyumba</h1><a href="/properties">Properties</a></nav>
{body}</body></html>"#,
        title = esc(title),
    )
}

/// One summary card. Bed/bath/area figures appear only when present.
pub fn listing_card(listing: &Listing) -> String {
    let mut specs = Vec::new();
    if let Some(beds) = listing.bedrooms {
        specs.push(format!("{beds} beds"));
    }
    if let Some(baths) = listing.bathrooms {
        specs.push(format!("{baths} baths"));
    }
    if let Some(area) = listing.area {
        specs.push(format!("{area} m\u{b2}"));
    }
    let specs = if specs.is_empty() {
        String::new()
    } else {
        format!(
            r#"<div class="specs">{}</div>"#,
            specs
                .iter()
                .map(|s| format!("<span>{s}</span>"))
                .collect::<String>()
        )
    };

    let mut badges = vec![format!(
        r#"<span class="badge status">{}</span>"#,
        listing.status.label()
    )];
    badges.push(format!(
        r#"<span class="badge">{}</span>"#,
        listing.property_type.label()
    ));
    if listing.is_furnished {
        badges.push(r#"<span class="badge">Furnished</span>"#.to_string());
    }
    if listing.has_parking {
        badges.push(r#"<span class="badge">Parking</span>"#.to_string());
    }
    if listing.has_security {
        badges.push(r#"<span class="badge">Security</span>"#.to_string());
    }

    format!(
        r#"<div class="card">
<div class="price">{price} <small>/month</small></div>
<h3><a href="/properties/{id}">{title}</a></h3>
<div class="address">{address}, {city}</div>
{specs}<div class="badges">{badges}</div>
</div>"#,
        price = format_price(listing.price, &listing.currency),
        id = listing.id,
        title = esc(&listing.title),
        address = esc(&listing.address),
        city = esc(&listing.city),
        badges = badges.concat(),
    )
}

/// Render the listing collection for the current fetch state.
pub fn render_listings(state: &FetchState<Vec<Listing>>) -> String {
    match state {
        FetchState::Loading => r#"<div class="notice">Loading properties...</div>"#.to_string(),
        FetchState::Failed(message) => {
            format!(r#"<div class="notice error">{}</div>"#, esc(message))
        }
        FetchState::Ready(listings) if listings.is_empty() => {
            r#"<div class="notice">No properties found matching your criteria.</div>"#.to_string()
        }
        FetchState::Ready(listings) => {
            // Server-supplied order; no client-side re-sorting.
            let cards: String = listings.iter().map(listing_card).collect();
            format!(r#"<div class="grid">{cards}</div>"#)
        }
    }
}

fn option(value: &str, label: &str, selected: bool) -> String {
    format!(
        r#"<option value="{value}"{sel}>{label}</option>"#,
        sel = if selected { " selected" } else { "" },
    )
}

/// The search form, rendered from the controller's draft.
pub fn search_form(form: &SearchForm) -> String {
    let draft = form.draft();

    let type_options: String = PropertyType::ALL
        .iter()
        .map(|t| option(t.as_str(), t.label(), draft.property_type == Some(*t)))
        .collect();

    // Bathrooms select caps the choice at "3+"; the encoded value stays the
    // numeric lower bound.
    let bedroom_options: String = [(1, "1"), (2, "2"), (3, "3"), (4, "4+")]
        .iter()
        .map(|(n, label)| option(&n.to_string(), label, draft.bedrooms == Some(*n)))
        .collect();
    let bathroom_options: String = [(1, "1"), (2, "2"), (3, "3+")]
        .iter()
        .map(|(n, label)| option(&n.to_string(), label, draft.bathrooms == Some(*n)))
        .collect();

    let number_value = |v: Option<f64>| v.map(|n| n.to_string()).unwrap_or_default();
    let check = |on: bool| if on { " checked" } else { "" };

    format!(
        r#"<form class="search" method="GET" action="/properties">
<div><label for="property_type">Property Type</label>
<select id="property_type" name="property_type"><option value="">Any</option>{type_options}</select></div>
<div><label for="min_price">Min Price</label>
<input type="number" id="min_price" name="min_price" value="{min_price}" placeholder="Min price"></div>
<div><label for="max_price">Max Price</label>
<input type="number" id="max_price" name="max_price" value="{max_price}" placeholder="Max price"></div>
<div><label for="city">City</label>
<input type="text" id="city" name="city" value="{city}" placeholder="Enter city"></div>
<div><label for="district">District</label>
<input type="text" id="district" name="district" value="{district}" placeholder="Enter district"></div>
<div><label for="bedrooms">Bedrooms</label>
<select id="bedrooms" name="bedrooms"><option value="">Any</option>{bedroom_options}</select></div>
<div><label for="bathrooms">Bathrooms</label>
<select id="bathrooms" name="bathrooms"><option value="">Any</option>{bathroom_options}</select></div>
<div class="checks">
<label><input type="checkbox" name="is_furnished"{furnished}> Furnished</label>
<label><input type="checkbox" name="has_parking"{parking}> Parking</label>
<label><input type="checkbox" name="has_security"{security}> Security</label>
</div>
<button type="submit">Search Properties</button>
</form>"#,
        min_price = number_value(draft.min_price),
        max_price = number_value(draft.max_price),
        city = esc(draft.city.as_deref().unwrap_or("")),
        district = esc(draft.district.as_deref().unwrap_or("")),
        furnished = check(draft.is_furnished),
        parking = check(draft.has_parking),
        security = check(draft.has_security),
    )
}

/// Full listings page: heading, search form, and the listing collection.
pub fn properties_page(form: &SearchForm, state: &FetchState<Vec<Listing>>) -> String {
    let body = format!(
        r#"<div class="container">
<h2>Available Properties</h2>
<p class="address">Find your perfect rental property</p>
{form}{listings}</div>"#,
        form = search_form(form),
        listings = render_listings(state),
    );
    layout("Available Properties", &body)
}

fn stars(rating: f32) -> String {
    let full = rating.round().clamp(0.0, 5.0) as usize;
    format!(
        r#"<span class="stars">{}{}</span>"#,
        "\u{2605}".repeat(full),
        "\u{2606}".repeat(5 - full)
    )
}

/// Reviews section for a property detail page.
pub fn render_reviews(state: &FetchState<Vec<Review>>) -> String {
    match state {
        FetchState::Loading => r#"<div class="notice">Loading reviews...</div>"#.to_string(),
        FetchState::Failed(message) => {
            format!(r#"<div class="notice error">{}</div>"#, esc(message))
        }
        FetchState::Ready(reviews) if reviews.is_empty() => {
            r#"<div class="notice">No reviews yet.</div>"#.to_string()
        }
        FetchState::Ready(reviews) => {
            let average = average_rating(reviews);
            let items: String = reviews
                .iter()
                .map(|review| {
                    format!(
                        r#"<div class="review"><strong>{name}</strong> {stars}
<div class="meta">{date}</div><p>{comment}</p></div>"#,
                        name = esc(&review.reviewer_name),
                        stars = stars(review.rating),
                        date = review.created_at.format("%-d %B %Y"),
                        comment = esc(&review.comment),
                    )
                })
                .collect();
            format!(
                r#"<p>{average:.1} {stars} ({count} reviews)</p>{items}"#,
                stars = stars(average),
                count = reviews.len(),
            )
        }
    }
}

/// Property detail page, with the reviews section below the listing.
pub fn property_detail_page(listing: &Listing, reviews: &FetchState<Vec<Review>>) -> String {
    let mut location = format!("{}, {}", listing.address, listing.city);
    if let Some(district) = &listing.district {
        location.push_str(", ");
        location.push_str(district);
    }

    let mut specs = Vec::new();
    if let Some(beds) = listing.bedrooms {
        specs.push(format!("{beds} Bedrooms"));
    }
    if let Some(baths) = listing.bathrooms {
        specs.push(format!("{baths} Bathrooms"));
    }
    if let Some(area) = listing.area {
        specs.push(format!("{area} m\u{b2}"));
    }
    specs.push(listing.property_type.label().to_string());

    let features: String = [
        (listing.is_furnished, "Furnished"),
        (listing.has_parking, "Parking"),
        (listing.has_security, "Security"),
        (listing.has_water, "Water"),
        (listing.has_electricity, "Electricity"),
    ]
    .iter()
    .filter(|(present, _)| *present)
    .map(|(_, label)| format!(r#"<span class="badge">{label}</span>"#))
    .collect();

    let image = listing
        .images
        .first()
        .map(|url| format!(r#"<img src="{}" alt="{}">"#, esc(url), esc(&listing.title)))
        .unwrap_or_default();

    let description = listing
        .description
        .as_deref()
        .map(|text| format!("<h3>Description</h3><p>{}</p>", esc(text)))
        .unwrap_or_default();

    let body = format!(
        r#"<div class="container">{image}
<div class="card">
<h2>{title}</h2>
<div class="address">{location}</div>
<div class="price">{price} <small>/month</small></div>
<div class="specs">{specs}</div>
<div class="badges">{features}</div>
{description}
<h3>Reviews</h3>
{reviews}
</div></div>"#,
        title = esc(&listing.title),
        location = esc(&location),
        price = format_price(listing.price, &listing.currency),
        specs = specs
            .iter()
            .map(|s| format!("<span>{s}</span>"))
            .collect::<String>(),
        reviews = render_reviews(reviews),
    );
    layout(&listing.title, &body)
}

/// Error page with the message as the sole content.
pub fn error_page(message: &str) -> String {
    layout(
        "Error",
        &format!(
            r#"<div class="container"><div class="notice error">{}</div></div>"#,
            esc(message)
        ),
    )
}
