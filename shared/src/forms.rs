/// A page form wired to the generic validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageForm {
    pub id: &'static str,
    pub label: &'static str,
    pub success_message: &'static str,
}

pub static PAGE_FORMS: [PageForm; 3] = [
    PageForm {
        id: "homeInquiryForm",
        label: "Home inquiry",
        success_message: "Thank you! Your message has been sent successfully. We will get back to you soon.",
    },
    PageForm {
        id: "contactForm",
        label: "Contact",
        success_message: "Thank you for your message! We will respond within 24 hours.",
    },
    PageForm {
        id: "eventRegistrationForm",
        label: "Event registration",
        success_message: "Successfully registered for the event! Check your email for confirmation.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        for (i, a) in PAGE_FORMS.iter().enumerate() {
            assert!(PAGE_FORMS.iter().skip(i + 1).all(|b| b.id != a.id));
        }
    }
}
