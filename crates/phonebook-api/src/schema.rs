//! External schema contract in SDL form.
//!
//! The document is served at `GET /api/schema`. Only the nullability of
//! `Person.phone` varies, following the active [`PhonePolicy`].

use phonebook_types::PhonePolicy;

/// Render the SDL document for the given phone policy.
pub fn render_sdl(policy: PhonePolicy) -> String {
    let phone = if policy.is_required() {
        "String!"
    } else {
        "String"
    };

    format!(
        "\
enum YesNo {{
  YES
  NO
}}

type Address {{
  city: String!
  street: String!
}}

type Person {{
  name: String!
  phone: {phone}
  address: Address!
  id: ID!
}}

type Query {{
  personCount: Int!
  allPeople(phone: YesNo): [Person]!
  findPerson(name: String!): Person!
}}

type Mutation {{
  addPerson(
    name: String!
    phone: {phone}
    street: String!
    city: String!
  ): Person
  editPhone(
    id: String!
    phone: String!
  ): Person
}}
"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_policy_leaves_phone_nullable() {
        let sdl = render_sdl(PhonePolicy::Optional);
        assert!(sdl.contains("  phone: String\n  address"));
        assert!(!sdl.contains("  phone: String!\n  address"));
    }

    #[test]
    fn required_policy_marks_phone_non_null() {
        let sdl = render_sdl(PhonePolicy::Required);
        assert!(sdl.contains("  phone: String!\n  address"));
        assert!(sdl.contains("    phone: String!\n    street"));
    }

    #[test]
    fn edit_phone_takes_a_string_id() {
        let sdl = render_sdl(PhonePolicy::Optional);
        assert!(sdl.contains("  editPhone(\n    id: String!\n    phone: String!\n  ): Person"));
        assert!(sdl.contains("  id: ID!\n}"));
    }

    #[test]
    fn query_fields_are_present() {
        let sdl = render_sdl(PhonePolicy::Optional);
        for field in [
            "personCount: Int!",
            "allPeople(phone: YesNo): [Person]!",
            "findPerson(name: String!): Person!",
        ] {
            assert!(sdl.contains(field), "missing {field}");
        }
    }
}
