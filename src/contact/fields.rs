use serde::{Deserialize, Serialize};

/// Identifies one input of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FieldKey {
    Name,
    Email,
    Subject,
    Message,
}

impl FieldKey {
    pub const ALL: [FieldKey; 4] = [
        FieldKey::Name,
        FieldKey::Email,
        FieldKey::Subject,
        FieldKey::Message,
    ];

    /// The `id`/`name` attribute used for the matching input element.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKey::Name => "name",
            FieldKey::Email => "email",
            FieldKey::Subject => "subject",
            FieldKey::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldKey::Name => "Name",
            FieldKey::Email => "Email",
            FieldKey::Subject => "Subject",
            FieldKey::Message => "Message",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, FieldKey::Subject)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl FormFields {
    pub fn get(&self, key: FieldKey) -> &str {
        match key {
            FieldKey::Name => &self.name,
            FieldKey::Email => &self.email,
            FieldKey::Subject => &self.subject,
            FieldKey::Message => &self.message,
        }
    }

    pub fn set(&mut self, key: FieldKey, value: String) {
        let slot = match key {
            FieldKey::Name => &mut self.name,
            FieldKey::Email => &mut self.email,
            FieldKey::Subject => &mut self.subject,
            FieldKey::Message => &mut self.message,
        };
        *slot = value;
    }

    pub fn is_empty(&self) -> bool {
        FieldKey::ALL.iter().all(|k| self.get(*k).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_and_set_by_key() {
        let mut fields = FormFields::default();
        assert!(fields.is_empty());

        fields.set(FieldKey::Email, "jo@example.com".to_string());
        fields.set(FieldKey::Subject, "Hello".to_string());

        assert_eq!(fields.get(FieldKey::Email), "jo@example.com");
        assert_eq!(fields.subject, "Hello");
        assert_eq!(fields.get(FieldKey::Name), "");
        assert!(!fields.is_empty());
    }

    #[test]
    fn test_key_attributes() {
        let ids = FieldKey::ALL.map(FieldKey::as_str);
        assert_eq!(ids, ["name", "email", "subject", "message"]);
        assert!(FieldKey::Name.is_required());
        assert!(FieldKey::Email.is_required());
        assert!(FieldKey::Message.is_required());
        assert!(!FieldKey::Subject.is_required());
    }
}
