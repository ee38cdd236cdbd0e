pub mod about;
pub mod contact;
pub mod experience;
pub mod hero;
pub mod projects;
pub mod skills;

pub(crate) use {
    self::about::About, self::contact::Contact, self::experience::Experience, self::hero::Hero,
    self::projects::Projects, self::skills::Skills,
};
