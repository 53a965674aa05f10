//! Published company contact details.

/// How to reach the company, as printed on the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompanyContact {
    pub legal_name: &'static str,
    pub brand: &'static str,
    pub established: &'static str,
    /// Phone number formatted for display.
    pub phone: &'static str,
    pub email: &'static str,
    /// Postal address, one line per entry.
    pub address: &'static [&'static str],
    /// Single-line address for tight spots (footer, sidebars).
    pub address_short: &'static str,
    pub hours: &'static [&'static str],
    pub timezone: &'static str,
    pub certifications: &'static [&'static str],
}

impl CompanyContact {
    /// `tel:` URI with spaces removed.
    pub fn tel_uri(&self) -> String {
        let digits: String = self.phone.chars().filter(|c| !c.is_whitespace()).collect();
        format!("tel:{digits}")
    }

    pub fn mailto_uri(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

pub const RSI_CHICORY: CompanyContact = CompanyContact {
    legal_name: "RS Impex",
    brand: "RSI Chicory",
    established: "2025",
    phone: "+91 9810550456",
    email: "rsichicory@gmail.com",
    address: &["X-19, UPSIDC-IA", "GT Road, Etah", "Uttar Pradesh 207001, India"],
    address_short: "X-19, UPSIDC-IA, GT Rd, Etah, UP 207001",
    hours: &["Monday - Saturday: 9:00 AM - 6:00 PM", "Sunday: Closed"],
    timezone: "Indian Standard Time (IST)",
    certifications: &["FSSAI", "APEDA", "IEC"],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uris_are_well_formed() {
        assert_eq!(RSI_CHICORY.tel_uri(), "tel:+919810550456");
        assert_eq!(RSI_CHICORY.mailto_uri(), "mailto:rsichicory@gmail.com");
    }
}
