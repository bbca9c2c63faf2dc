//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::BTreeMap;

use crate::core::config::SiteSettings;
use crate::core::initiatives::InitiativeRecord;
use crate::core::router::ACTIVATION_DELAY_MS;
use crate::core::site::SiteContent;
use crate::core::state::Site;
use crate::core::timer::{TimerId, TimerQueue};

const SAMPLE_SITE: &str = r##"
[site]
name = "Sample Authority"
tagline = "Quality education for all"

[[pages]]
id = "home"
title = "Home"
active = true
features = ["carousel"]
body = "Welcome. Read about [our initiatives](#initiatives)."

[[pages]]
id = "about"
title = "About"
body = "Who we are."

[[pages.anchors]]
id = "mission"
offset = 10

[[pages]]
id = "leadership"
title = "Leadership"

[[pages]]
id = "initiatives"
title = "Initiatives"
features = ["initiatives"]

[[pages]]
id = "publications"
title = "Publications"
features = ["publications"]

[[pages]]
id = "contact"
title = "Contact"
features = ["contact_form"]

[[nav]]
label = "Home"
href = "#home"

[[nav]]
label = "Overview"
href = "#about"
group = "About"

[[nav]]
label = "Leadership"
href = "#leadership"
group = "About"

[[nav]]
label = "Initiatives"
href = "#initiatives"

[[nav]]
label = "Publications"
href = "#publications"

[[nav]]
label = "Contact"
href = "#contact"

[[carousel.slides]]
name = "Dr. A. Rahman"
role = "Chairperson"
message = "Every child deserves a good school."

[[carousel.slides]]
name = "S. Malik"
role = "Managing Director"
message = "We measure success by learning outcomes."

[[publications]]
title = "Annual Report 2022"
category = "reports"

[[publications]]
title = "Annual Report 2021"
category = "reports"

[[publications]]
title = "Voucher Policy"
category = "policies"

[initiatives.foundation]
title = "Foundation Assisted Schools"
subtitle = "Improving school infrastructure & resources"
launch = "January 2016"

[initiatives.voucher]
title = "Education Voucher Scheme"
subtitle = "Financial assistance for deserving students"
launch = "March 2017"
"##;

pub fn sample_content() -> SiteContent {
    SiteContent::from_toml_str(SAMPLE_SITE).expect("sample site parses")
}

pub fn sample_catalog() -> BTreeMap<String, InitiativeRecord> {
    sample_content().initiatives
}

/// Creates a test Site from the sample content with default settings.
pub fn test_site() -> Site {
    Site::new(sample_content(), &SiteSettings::default())
}

/// Lets pending activation ticks fire, handing each due timer to `on_fire`.
pub fn settle(timers: &mut TimerQueue, mut on_fire: impl FnMut(TimerId) -> bool) {
    timers.advance_by(ACTIVATION_DELAY_MS);
    while let Some(id) = timers.pop_due() {
        on_fire(id);
    }
}

/// Renders a page section at `width` and returns its rows as strings.
pub fn section_rows(section: &dyn crate::tui::component::Section, width: u16) -> Vec<String> {
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;
    use ratatui::widgets::Widget;

    let height = section.height(width);
    let area = Rect::new(0, 0, width, height);
    let mut buffer = Buffer::empty(area);
    section.paragraph(width).render(area, &mut buffer);
    (0..height)
        .map(|y| (0..width).map(|x| buffer[(x, y)].symbol()).collect())
        .collect()
}
