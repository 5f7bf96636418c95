/// Columns that only some city files provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionalField {
    UserType,
    Gender,
    BirthYear,
}

impl OptionalField {
    /// Header name of the column in the source files.
    pub fn column(self) -> &'static str {
        match self {
            OptionalField::UserType => "User Type",
            OptionalField::Gender => "Gender",
            OptionalField::BirthYear => "Birth Year",
        }
    }

    const ALL: [OptionalField; 3] = [
        OptionalField::UserType,
        OptionalField::Gender,
        OptionalField::BirthYear,
    ];
}

/// Which optional columns a loaded table actually carries.
///
/// Aggregators query this set instead of probing rows, so "column
/// absent for this city" and "value missing in this row" stay distinct.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldSet {
    user_type: bool,
    gender: bool,
    birth_year: bool,
}

impl FieldSet {
    /// Builds the set from a file's header record.
    pub fn from_headers<'a>(headers: impl IntoIterator<Item = &'a str>) -> Self {
        let mut set = FieldSet::default();
        for header in headers {
            for field in OptionalField::ALL {
                if header == field.column() {
                    set.insert(field);
                }
            }
        }
        set
    }

    pub fn insert(&mut self, field: OptionalField) {
        match field {
            OptionalField::UserType => self.user_type = true,
            OptionalField::Gender => self.gender = true,
            OptionalField::BirthYear => self.birth_year = true,
        }
    }

    pub fn has(self, field: OptionalField) -> bool {
        match field {
            OptionalField::UserType => self.user_type,
            OptionalField::Gender => self.gender,
            OptionalField::BirthYear => self.birth_year,
        }
    }
}
