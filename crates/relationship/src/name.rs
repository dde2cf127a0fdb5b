use kinship_graph::Sex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single kinship step, e.g. "FATHER" or "GREAT_AUNT".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelationshipName {
    Father,
    Mother,
    Husband,
    Wife,
    Son,
    Daughter,
    Child,
    Brother,
    Sister,
    Sibling,
    Grandfather,
    Grandmother,
    Grandson,
    Granddaughter,
    Grandchild,
    GreatGrandfather,
    GreatGrandmother,
    GreatGrandson,
    GreatGranddaughter,
    GreatGrandchild,
    GreatGreatGrandfather,
    GreatGreatGrandmother,
    GreatGreatGrandson,
    GreatGreatGranddaughter,
    GreatGreatGrandchild,
    GreatGreatGreatGrandfather,
    GreatGreatGreatGrandmother,
    GreatGreatGreatGrandson,
    GreatGreatGreatGranddaughter,
    GreatGreatGreatGrandchild,
    Uncle,
    Aunt,
    Nephew,
    Niece,
    FirstCousin,
    GreatUncle,
    GreatAunt,
    GreatNephew,
    GreatNiece,
    GreatGreatUncle,
    GreatGreatAunt,
    GreatGreatNephew,
    GreatGreatNiece,
}

use RelationshipName::*;

/// Pick by sex; `unknown` is `None` where no neutral word exists.
fn by_sex(
    sex: Sex,
    male: RelationshipName,
    female: RelationshipName,
    unknown: Option<RelationshipName>,
) -> Option<RelationshipName> {
    match sex {
        Sex::Male => Some(male),
        Sex::Female => Some(female),
        Sex::Unknown => unknown,
    }
}

impl RelationshipName {
    /// Lower is more direct. Used to choose between chains of equal length.
    pub fn simplicity(self) -> u32 {
        match self {
            Father | Mother | Husband | Wife | Son | Daughter | Child | Brother | Sister
            | Sibling => 1,
            Grandfather | Grandmother | Grandson | Granddaughter | Grandchild => 2,
            GreatGrandfather | GreatGrandmother | GreatGrandson | GreatGranddaughter
            | GreatGrandchild => 3,
            GreatGreatGrandfather | GreatGreatGrandmother | GreatGreatGrandson
            | GreatGreatGranddaughter | GreatGreatGrandchild => 4,
            GreatGreatGreatGrandfather
            | GreatGreatGreatGrandmother
            | GreatGreatGreatGrandson
            | GreatGreatGreatGranddaughter
            | GreatGreatGreatGrandchild => 5,
            Uncle | Aunt | Nephew | Niece => 6,
            FirstCousin => 7,
            GreatUncle | GreatAunt | GreatNephew | GreatNiece => 8,
            GreatGreatUncle | GreatGreatAunt | GreatGreatNephew | GreatGreatNiece => 9,
        }
    }

    /// The step seen from the other end, for a person of sex `sex`.
    ///
    /// "My FATHER" reversed for a daughter is DAUGHTER. Returns `None` when the
    /// language has no neutral word (e.g. the reverse of SON for a person of
    /// unknown sex).
    pub fn reverse(self, sex: Sex) -> Option<RelationshipName> {
        match self {
            Husband => (sex == Sex::Female).then_some(Wife),
            Wife => (sex == Sex::Male).then_some(Husband),

            Father | Mother => by_sex(sex, Son, Daughter, Some(Child)),
            Son | Daughter | Child => by_sex(sex, Father, Mother, None),
            Brother | Sister | Sibling => by_sex(sex, Brother, Sister, Some(Sibling)),

            Grandfather | Grandmother => by_sex(sex, Grandson, Granddaughter, Some(Grandchild)),
            Grandson | Granddaughter | Grandchild => by_sex(sex, Grandfather, Grandmother, None),

            GreatGrandfather | GreatGrandmother => by_sex(
                sex,
                GreatGrandson,
                GreatGranddaughter,
                Some(GreatGrandchild),
            ),
            GreatGrandson | GreatGranddaughter | GreatGrandchild => {
                by_sex(sex, GreatGrandfather, GreatGrandmother, None)
            }

            GreatGreatGrandfather | GreatGreatGrandmother => by_sex(
                sex,
                GreatGreatGrandson,
                GreatGreatGranddaughter,
                Some(GreatGreatGrandchild),
            ),
            GreatGreatGrandson | GreatGreatGranddaughter | GreatGreatGrandchild => {
                by_sex(sex, GreatGreatGrandfather, GreatGreatGrandmother, None)
            }

            GreatGreatGreatGrandfather | GreatGreatGreatGrandmother => by_sex(
                sex,
                GreatGreatGreatGrandson,
                GreatGreatGreatGranddaughter,
                Some(GreatGreatGreatGrandchild),
            ),
            GreatGreatGreatGrandson | GreatGreatGreatGranddaughter | GreatGreatGreatGrandchild => {
                by_sex(sex, GreatGreatGreatGrandfather, GreatGreatGreatGrandmother, None)
            }

            Uncle | Aunt => by_sex(sex, Nephew, Niece, None),
            Nephew | Niece => by_sex(sex, Uncle, Aunt, None),
            GreatUncle | GreatAunt => by_sex(sex, GreatNephew, GreatNiece, None),
            GreatNephew | GreatNiece => by_sex(sex, GreatUncle, GreatAunt, None),
            GreatGreatUncle | GreatGreatAunt => by_sex(sex, GreatGreatNephew, GreatGreatNiece, None),
            GreatGreatNephew | GreatGreatNiece => by_sex(sex, GreatGreatUncle, GreatGreatAunt, None),

            FirstCousin => Some(FirstCousin),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Father => "FATHER",
            Mother => "MOTHER",
            Husband => "HUSBAND",
            Wife => "WIFE",
            Son => "SON",
            Daughter => "DAUGHTER",
            Child => "CHILD",
            Brother => "BROTHER",
            Sister => "SISTER",
            Sibling => "SIBLING",
            Grandfather => "GRANDFATHER",
            Grandmother => "GRANDMOTHER",
            Grandson => "GRANDSON",
            Granddaughter => "GRANDDAUGHTER",
            Grandchild => "GRANDCHILD",
            GreatGrandfather => "GREAT_GRANDFATHER",
            GreatGrandmother => "GREAT_GRANDMOTHER",
            GreatGrandson => "GREAT_GRANDSON",
            GreatGranddaughter => "GREAT_GRANDDAUGHTER",
            GreatGrandchild => "GREAT_GRANDCHILD",
            GreatGreatGrandfather => "GREAT_GREAT_GRANDFATHER",
            GreatGreatGrandmother => "GREAT_GREAT_GRANDMOTHER",
            GreatGreatGrandson => "GREAT_GREAT_GRANDSON",
            GreatGreatGranddaughter => "GREAT_GREAT_GRANDDAUGHTER",
            GreatGreatGrandchild => "GREAT_GREAT_GRANDCHILD",
            GreatGreatGreatGrandfather => "GREAT_GREAT_GREAT_GRANDFATHER",
            GreatGreatGreatGrandmother => "GREAT_GREAT_GREAT_GRANDMOTHER",
            GreatGreatGreatGrandson => "GREAT_GREAT_GREAT_GRANDSON",
            GreatGreatGreatGranddaughter => "GREAT_GREAT_GREAT_GRANDDAUGHTER",
            GreatGreatGreatGrandchild => "GREAT_GREAT_GREAT_GRANDCHILD",
            Uncle => "UNCLE",
            Aunt => "AUNT",
            Nephew => "NEPHEW",
            Niece => "NIECE",
            FirstCousin => "FIRST_COUSIN",
            GreatUncle => "GREAT_UNCLE",
            GreatAunt => "GREAT_AUNT",
            GreatNephew => "GREAT_NEPHEW",
            GreatNiece => "GREAT_NIECE",
            GreatGreatUncle => "GREAT_GREAT_UNCLE",
            GreatGreatAunt => "GREAT_GREAT_AUNT",
            GreatGreatNephew => "GREAT_GREAT_NEPHEW",
            GreatGreatNiece => "GREAT_GREAT_NIECE",
        }
    }

    /// Parent step for a person of the given sex; unknown sex reads as FATHER.
    pub fn parent_for(sex: Sex) -> RelationshipName {
        if sex == Sex::Female {
            Mother
        } else {
            Father
        }
    }

    pub fn child_for(sex: Sex) -> RelationshipName {
        match sex {
            Sex::Male => Son,
            Sex::Female => Daughter,
            Sex::Unknown => Child,
        }
    }
}

impl fmt::Display for RelationshipName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
