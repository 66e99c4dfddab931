//! HTML rendering for the static pages.
//!
//! Every page is a full document: title, heading, body sections, and the
//! company footer (address, phone, email, USDOT, MC).  All interpolated text
//! goes through [`escape`].

use crate::config::SiteConfig;

use super::Page;
use super::content::{
    Announcement, CARRIER_LIABILITY, DRIVER_BENEFITS, DRIVER_REQUIREMENTS, DetailCard, Feature,
    HOME_FEATURES, LEGAL_LAST_UPDATED, NO_THIRD_PARTY_SHARING, PRIVACY_SECTIONS,
    SAFETY_ANNOUNCEMENTS, SAFETY_POLICIES, SERVICE_TYPES, SHIPPER_VALUE_PROPS, SMS_FREQUENCY,
    SMS_MESSAGE_TYPES, STOP_KEYWORDS,
};

/// Escape text for HTML element content and double-quoted attributes.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Append-only HTML body builder.  Every text and attribute argument is
/// escaped; tag names are not.
#[derive(Default)]
struct Body {
    html: String,
}

impl Body {
    fn section(&mut self, id: &str) -> &mut Self {
        self.html.push_str(&format!("<section id=\"{}\">\n", escape(id)));
        self
    }

    fn end_section(&mut self) -> &mut Self {
        self.html.push_str("</section>\n");
        self
    }

    fn h1(&mut self, text: &str) -> &mut Self {
        self.tag("h1", text)
    }

    fn h2(&mut self, text: &str) -> &mut Self {
        self.tag("h2", text)
    }

    fn h3(&mut self, text: &str) -> &mut Self {
        self.tag("h3", text)
    }

    fn p(&mut self, text: &str) -> &mut Self {
        self.tag("p", text)
    }

    fn tag(&mut self, name: &str, text: &str) -> &mut Self {
        self.html.push_str(&format!("<{name}>{}</{name}>\n", escape(text)));
        self
    }

    fn link(&mut self, href: &str, text: &str) -> &mut Self {
        self.html.push_str(&format!(
            "<p><a href=\"{}\">{}</a></p>\n",
            escape(href),
            escape(text)
        ));
        self
    }

    fn list<'a>(&mut self, items: impl IntoIterator<Item = &'a str>) -> &mut Self {
        self.html.push_str("<ul>\n");
        for item in items {
            self.html.push_str(&format!("  <li>{}</li>\n", escape(item)));
        }
        self.html.push_str("</ul>\n");
        self
    }

    fn features(&mut self, features: &[Feature]) -> &mut Self {
        for f in features {
            self.html.push_str(&format!(
                "<article class=\"card\"><h3>{}</h3><p>{}</p></article>\n",
                escape(f.title),
                escape(f.description)
            ));
        }
        self
    }

    fn detail_cards(&mut self, cards: &[DetailCard]) -> &mut Self {
        for card in cards {
            self.html.push_str("<article class=\"card\">\n");
            self.h3(card.title).p(card.description).list(card.details.iter().copied());
            self.html.push_str("</article>\n");
        }
        self
    }

    fn announcements(&mut self, items: &[Announcement]) -> &mut Self {
        for a in items {
            self.html.push_str(&format!(
                "<article class=\"announcement\" data-priority=\"{}\"><time datetime=\"{}\">{}</time><h3>{}</h3><p>{}</p></article>\n",
                a.priority.as_str(),
                escape(a.date),
                escape(a.date),
                escape(a.title),
                escape(a.content)
            ));
        }
        self
    }

    fn contact_block(&mut self, site: &SiteConfig) -> &mut Self {
        self.html.push_str(&format!(
            "<p><a href=\"tel:{phone}\">{phone}</a> &middot; <a href=\"mailto:{email}\">{email}</a></p>\n",
            phone = escape(&site.phone),
            email = escape(&site.email)
        ));
        self
    }
}

// ── Pages ─────────────────────────────────────────────────────────────────────

pub fn render(page: Page, site: &SiteConfig) -> String {
    let mut body = Body::default();
    match page {
        Page::Home => home(&mut body, site),
        Page::Services => services(&mut body),
        Page::Shippers => shippers(&mut body, site),
        Page::Drivers => drivers(&mut body, site),
        Page::Safety => safety(&mut body, site),
        Page::About => {
            body.h1("About Us")
                .p("Learn more about our company history and mission.");
        }
        Page::Quote => {
            body.h1("Get a Quote")
                .p("Request a competitive quote for your shipping requirements.")
                .link("/shippers#quote", "Request a quote");
        }
        Page::Contact => contact(&mut body, site),
        Page::Privacy => privacy(&mut body, site),
        Page::SmsTerms => sms_terms(&mut body, site),
    }
    layout(page.title(), site, &body.html)
}

pub fn render_not_found(site: &SiteConfig) -> String {
    let mut body = Body::default();
    body.h1("Page Not Found")
        .p("The page you are looking for does not exist.")
        .link("/", "Back to home");
    layout("Page Not Found", site, &body.html)
}

fn home(b: &mut Body, site: &SiteConfig) {
    b.section("hero")
        .p(&format!("DOT: {} | MC: {}", site.usdot, site.mc))
        .h1("Professional Freight Transportation")
        .p("Reliable, safe, and efficient cargo transportation across the United States. Licensed, insured, and committed to delivering your freight on time.")
        .link("/quote", "Get a Quote")
        .link("/drivers", &format!("Drive with {}", short_name(site)))
        .end_section();

    b.section("services")
        .h2("Why Choose Our Services")
        .p("Professional freight solutions backed by years of experience and cutting-edge technology")
        .features(HOME_FEATURES)
        .end_section();

    b.section("coverage")
        .h2("Nationwide Coverage")
        .p("Our extensive network covers all 48 contiguous states, providing reliable freight transportation from coast to coast. Whether you're shipping locally or across the country, we have the experience and infrastructure to get your cargo there safely and on time.")
        .link("/services", "View Service Areas")
        .end_section();

    b.section("safety")
        .h3("DOT Compliant & Fully Insured")
        .p("We maintain the highest safety standards with regular inspections, driver training, and full compliance with federal transportation regulations.")
        .end_section();

    b.section("contact")
        .h3("Ready to Ship Your Freight?")
        .p("Contact our team today for competitive rates and reliable service")
        .contact_block(site)
        .end_section();
}

fn services(b: &mut Body) {
    b.h1("Comprehensive Freight Services")
        .p("Professional transportation solutions tailored to your specific cargo requirements.");

    b.html.push_str(
        "<table>\n<thead><tr><th>Service</th><th>Description</th><th>Typical Lanes</th><th>Trailer</th><th>Notes</th></tr></thead>\n<tbody>\n",
    );
    for s in SERVICE_TYPES {
        b.html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            escape(s.name),
            escape(s.description),
            escape(s.typical_lanes),
            escape(s.trailer_type),
            escape(s.notes)
        ));
    }
    b.html.push_str("</tbody>\n</table>\n");
    b.link("/shippers#quote", "Request a quote");
}

fn shippers(b: &mut Body, site: &SiteConfig) {
    b.h1("Freight Solutions for Shippers")
        .p("Dependable capacity, transparent pricing, and a team that answers the phone.")
        .features(SHIPPER_VALUE_PROPS);

    b.section("service-types")
        .h2("Service Types")
        .list(SERVICE_TYPES.iter().map(|s| s.name))
        .end_section();

    b.section("quote")
        .h2("Request a Quote")
        .p("We'll contact you within 24 hours with a competitive quote.")
        .contact_block(site)
        .end_section();
}

fn drivers(b: &mut Body, site: &SiteConfig) {
    b.h1(&format!("Drive with {}", site.name))
        .p("Join our team of professional drivers with competitive pay and benefits.")
        .detail_cards(DRIVER_BENEFITS);

    b.section("requirements")
        .h2("Driver Requirements")
        .list(DRIVER_REQUIREMENTS.iter().copied())
        .end_section();

    b.section("apply")
        .h2("Apply Now")
        .p("Thank you for your interest! We'll contact you within 24 hours to discuss opportunities.")
        .contact_block(site)
        .end_section();
}

fn safety(b: &mut Body, site: &SiteConfig) {
    b.h1("Safety & Compliance")
        .p(&format!("USDOT {} | MC {}", site.usdot, site.mc));

    b.section("policies")
        .h2("Safety Policies")
        .detail_cards(SAFETY_POLICIES)
        .end_section();

    b.section("announcements")
        .h2("Safety Announcements")
        .announcements(SAFETY_ANNOUNCEMENTS)
        .end_section();
}

fn contact(b: &mut Body, site: &SiteConfig) {
    b.h1("Contact Us")
        .p("Have questions about our services or need assistance?")
        .contact_block(site)
        .p(&site.address)
        .p(&format!(
            "By submitting the contact form you consent to receive SMS communications from {} regarding your inquiry. Message and data rates may apply. Reply STOP to opt out or HELP for assistance.",
            site.name
        ));

    b.section("help")
        .h2("How Can We Help You?")
        .link("/shippers#quote", "Shippers: get a quote")
        .link("/drivers#apply", "Drivers: apply now")
        .end_section();
}

fn privacy(b: &mut Body, site: &SiteConfig) {
    b.h1("Privacy Policy")
        .p("Your privacy is important to us. This policy explains how we collect, use, and protect your personal information.")
        .p(&format!("Last updated: {LEGAL_LAST_UPDATED}"));

    for s in PRIVACY_SECTIONS {
        b.h2(s.heading).p(s.lead).list(s.items.iter().copied());
    }

    b.h2("SMS Communications").list([
        "We'll send informational texts about quotes, applications, shipments, and service alerts",
        "Message frequency varies; message & data rates may apply",
        "Consent is not a condition of purchase",
    ]);
    b.p(&format!("You may opt out at any time by replying {STOP_KEYWORDS}."))
        .p(&format!(
            "Reply HELP for assistance or contact us at {} or {}.",
            site.phone, site.email
        ))
        .p(NO_THIRD_PARTY_SHARING)
        .p(CARRIER_LIABILITY);

    b.h2("Contact Us About Privacy").contact_block(site);
}

fn sms_terms(b: &mut Body, site: &SiteConfig) {
    b.h1("SMS Terms & Conditions")
        .p(&format!("Last updated: {LEGAL_LAST_UPDATED}"));

    b.h2("SMS Program Overview")
        .p(&format!(
            "{} offers SMS text messaging services to provide you with important updates about your freight shipments, quote requests, driver applications, and other business-related communications.",
            site.name
        ))
        .p("Consent Required: You must explicitly opt in to receive SMS messages from us. Consent is not a condition of purchase.");

    b.h2("Types of Messages").features(SMS_MESSAGE_TYPES);

    b.h2("How to Opt Out (STOP)")
        .p(&format!("Reply with any of these keywords: {STOP_KEYWORDS}."))
        .p(&format!(
            "You will no longer receive SMS messages from {}. To re-subscribe, you will need to opt in again.",
            site.name
        ));

    b.h2("Getting Help (HELP)")
        .p("Reply HELP to any SMS message from us.")
        .contact_block(site);

    b.h2("Privacy and Third-Party Sharing").p(NO_THIRD_PARTY_SHARING);

    b.h2("Message Frequency and Costs")
        .list(SMS_FREQUENCY.iter().copied())
        .p("Message and data rates may apply. We do not charge for SMS messages.");

    b.h2("Carrier Liability").p(CARRIER_LIABILITY);
}

/// First word of the company name, e.g. "CFTI" for "CFTI Freight".
fn short_name(site: &SiteConfig) -> &str {
    site.name.split_whitespace().next().unwrap_or(site.name.as_str())
}

// ── Layout ────────────────────────────────────────────────────────────────────

fn layout(title: &str, site: &SiteConfig, body: &str) -> String {
    let name = escape(&site.name);
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>{title} | {name}</title>
</head>
<body>
<main>
{body}</main>
<footer>
  <p><strong>{name}</strong></p>
  <p>{address}</p>
  <p><a href="tel:{phone}">{phone}</a></p>
  <p><a href="mailto:{email}">{email}</a></p>
  <p>USDOT Number: {usdot} &middot; MC Number: {mc}</p>
  <p><a href="/privacy">Privacy Policy</a> &middot; <a href="/sms-terms">SMS Terms</a></p>
  <p>&copy; {year} {name}. All rights reserved.</p>
</footer>
</body>
</html>
"#,
        title = escape(title),
        address = escape(&site.address),
        phone = escape(&site.phone),
        email = escape(&site.email),
        usdot = escape(&site.usdot),
        mc = escape(&site.mc),
        year = chrono::Utc::now().format("%Y"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_special_characters() {
        assert_eq!(
            escape(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn every_page_has_footer_credentials() {
        let site = SiteConfig::sample();
        for page in Page::ALL {
            let html = render(*page, &site);
            assert!(html.starts_with("<!doctype html>"), "{page:?}");
            assert!(html.contains(&site.usdot), "{page:?}");
            assert!(html.contains(&site.mc), "{page:?}");
            assert!(html.contains(&format!("tel:{}", escape(&site.phone))), "{page:?}");
            assert!(
                html.contains(&format!("{} | {}", escape(page.title()), site.name)),
                "{page:?}"
            );
        }
    }

    #[test]
    fn company_name_is_escaped() {
        let mut site = SiteConfig::sample();
        site.name = "Smith & Sons <Freight>".into();
        let html = render(Page::Home, &site);
        assert!(html.contains("Smith &amp; Sons &lt;Freight&gt;"));
        assert!(!html.contains("<Freight>"));
    }

    #[test]
    fn services_lists_every_service_type() {
        let html = render(Page::Services, &SiteConfig::sample());
        for s in SERVICE_TYPES {
            assert!(html.contains(s.name));
        }
    }

    #[test]
    fn safety_lists_policies_and_announcements() {
        let html = render(Page::Safety, &SiteConfig::sample());
        for p in SAFETY_POLICIES {
            assert!(html.contains(&escape(p.title)));
        }
        assert!(html.contains("data-priority=\"high\""));
    }

    #[test]
    fn drivers_lists_benefits_and_requirements() {
        let html = render(Page::Drivers, &SiteConfig::sample());
        assert!(html.contains("Competitive Pay"));
        assert!(html.contains("Valid Class A CDL with clean driving record"));
    }

    #[test]
    fn home_uses_short_name() {
        let html = render(Page::Home, &SiteConfig::sample());
        assert!(html.contains("Drive with CFTI"));
    }

    #[test]
    fn not_found_page() {
        let html = render_not_found(&SiteConfig::sample());
        assert!(html.contains("Page Not Found"));
    }
}
