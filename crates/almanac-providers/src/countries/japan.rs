//! Japan.
//!
//! National holidays under the 1948 Public Holiday Law, with its later
//! amendments. Two rules add days on top of the fixed and Happy Monday
//! holidays:
//!
//! - A holiday on a Sunday yields a substitute holiday (since April 1973).
//!   Since 2007 the substitute skips forward past other holidays; before,
//!   it was dropped if the next day was already a holiday.
//! - A single day between two holidays becomes a holiday (since 1986),
//!   unless it is a Sunday.

use almanac_core::bridge::bridge_days;
use almanac_core::collection::HolidayCollection;
use almanac_core::error::AlmanacResult;
use almanac_core::holiday::HolidayType;
use almanac_core::substitution::{CollisionRule, ShiftRule, SubstitutionPolicy};
use almanac_core::types::{Date, ZonedDate};
use chrono::Weekday;
use tracing::{debug, trace};

use crate::common;
use crate::provider::{Provider, ProviderContext};

/// The Public Holiday Law took effect in July 1948.
const HOLIDAY_LAW_SINCE: i32 = 1948;

/// Fixed holidays unchanged since 1948: key, month, day, English and
/// Japanese names.
const ORIGINAL_HOLIDAYS: &[(&str, u32, u32, &str, &str)] = &[
    ("constitutionDay", 5, 3, "Constitution Memorial Day", "憲法記念日"),
    ("childrensDay", 5, 5, "Children's Day", "こどもの日"),
    ("cultureDay", 11, 3, "Culture Day", "文化の日"),
    ("laborThanksgivingDay", 11, 23, "Labor Thanksgiving Day", "勤労感謝の日"),
];

/// Japanese national holidays.
#[derive(Debug, Clone, Copy, Default)]
pub struct Japan;

/// Day of March of the vernal equinox, for 1900..=2150.
pub(crate) fn vernal_equinox_day(year: i32) -> Option<u32> {
    let (base, leap_from) = match year {
        1900..=1979 => (20.8357, 1983),
        1980..=2099 => (20.8431, 1980),
        2100..=2150 => (21.8510, 1980),
        _ => return None,
    };
    Some(equinox(year, base, leap_from))
}

/// Day of September of the autumnal equinox, for 1900..=2150.
pub(crate) fn autumnal_equinox_day(year: i32) -> Option<u32> {
    let (base, leap_from) = match year {
        1900..=1979 => (23.2588, 1983),
        1980..=2099 => (23.2488, 1980),
        2100..=2150 => (24.2488, 1980),
        _ => return None,
    };
    Some(equinox(year, base, leap_from))
}

fn equinox(year: i32, base: f64, leap_from: i32) -> u32 {
    let drift = 0.242_194 * f64::from(year - 1980);
    // integer division truncates toward zero, as the published formulas do
    let leaps = f64::from((year - leap_from) / 4);
    (base + drift - leaps).floor() as u32
}

impl Japan {
    fn fixed_holidays(
        ctx: &ProviderContext<'_>,
        holidays: &mut HolidayCollection,
    ) -> AlmanacResult<()> {
        let year = ctx.year();
        let official = HolidayType::Official;

        holidays.add(common::new_years_day(ctx, official)?);
        for &(key, month, day, en, ja) in ORIGINAL_HOLIDAYS {
            holidays.add(ctx.fixed(key, month, day, &[("en", en), ("ja", ja)], official)?);
        }

        if year >= 1966 {
            holidays.add(ctx.fixed(
                "nationalFoundationDay",
                2,
                11,
                &[("en", "National Foundation Day"), ("ja", "建国記念の日")],
                official,
            )?);
        }

        let emperor = match year {
            1949..=1988 => Some((4, 29)),
            1989..=2018 => Some((12, 23)),
            2020.. => Some((2, 23)),
            _ => None,
        };
        if let Some((month, day)) = emperor {
            holidays.add(ctx.fixed(
                "emperorsBirthday",
                month,
                day,
                &[("en", "Emperor's Birthday"), ("ja", "天皇誕生日")],
                official,
            )?);
        }

        if year >= 2007 {
            holidays.add(ctx.fixed(
                "showaDay",
                4,
                29,
                &[("en", "Showa Day"), ("ja", "昭和の日")],
                official,
            )?);
        }
        let greenery = match year {
            1989..=2006 => Some((4, 29)),
            2007.. => Some((5, 4)),
            _ => None,
        };
        if let Some((month, day)) = greenery {
            holidays.add(ctx.fixed(
                "greeneryDay",
                month,
                day,
                &[("en", "Greenery Day"), ("ja", "みどりの日")],
                official,
            )?);
        }

        if let Some(day) = vernal_equinox_day(year) {
            holidays.add(ctx.fixed(
                "vernalEquinoxDay",
                3,
                day,
                &[("en", "Vernal Equinox Day"), ("ja", "春分の日")],
                official,
            )?);
        }
        if let Some(day) = autumnal_equinox_day(year) {
            holidays.add(ctx.fixed(
                "autumnalEquinoxDay",
                9,
                day,
                &[("en", "Autumnal Equinox Day"), ("ja", "秋分の日")],
                official,
            )?);
        }
        Ok(())
    }

    fn happy_monday_holidays(
        ctx: &ProviderContext<'_>,
        holidays: &mut HolidayCollection,
    ) -> AlmanacResult<()> {
        let year = ctx.year();
        let official = HolidayType::Official;

        let coming_of_age = if year >= 2000 {
            ctx.nth_weekday(1, Weekday::Mon, 2)?
        } else {
            ctx.date(1, 15)?
        };
        holidays.add(ctx.holiday(
            "comingOfAgeDay",
            coming_of_age,
            &[("en", "Coming of Age Day"), ("ja", "成人の日")],
            official,
        )?);

        let marine: Option<ZonedDate> = match year {
            2020 => Some(ctx.date(7, 23)?),
            2021 => Some(ctx.date(7, 22)?),
            2003.. => Some(ctx.nth_weekday(7, Weekday::Mon, 3)?),
            1996..=2002 => Some(ctx.date(7, 20)?),
            _ => None,
        };
        if let Some(date) = marine {
            holidays.add(ctx.holiday(
                "marineDay",
                date,
                &[("en", "Marine Day"), ("ja", "海の日")],
                official,
            )?);
        }

        let mountain = match year {
            2020 => Some(ctx.date(8, 10)?),
            2021 => Some(ctx.date(8, 8)?),
            2016.. => Some(ctx.date(8, 11)?),
            _ => None,
        };
        if let Some(date) = mountain {
            holidays.add(ctx.holiday(
                "mountainDay",
                date,
                &[("en", "Mountain Day"), ("ja", "山の日")],
                official,
            )?);
        }

        let aged = match year {
            2003.. => Some(ctx.nth_weekday(9, Weekday::Mon, 3)?),
            1966..=2002 => Some(ctx.date(9, 15)?),
            _ => None,
        };
        if let Some(date) = aged {
            holidays.add(ctx.holiday(
                "respectForTheAgedDay",
                date,
                &[("en", "Respect for the Aged Day"), ("ja", "敬老の日")],
                official,
            )?);
        }

        let sports = match year {
            2020 => Some(ctx.date(7, 24)?),
            2021 => Some(ctx.date(7, 23)?),
            2000.. => Some(ctx.nth_weekday(10, Weekday::Mon, 2)?),
            1966..=1999 => Some(ctx.date(10, 10)?),
            _ => None,
        };
        if let Some(date) = sports {
            let names: &[(&str, &str)] = if year >= 2020 {
                &[("en", "Sports Day"), ("ja", "スポーツの日")]
            } else {
                &[("en", "Health and Sports Day"), ("ja", "体育の日")]
            };
            holidays.add(ctx.holiday("sportsDay", date, names, official)?);
        }
        Ok(())
    }

    fn imperial_holidays(
        ctx: &ProviderContext<'_>,
        holidays: &mut HolidayCollection,
    ) -> AlmanacResult<()> {
        let specials: &[(&str, u32, u32, &str, &str)] = match ctx.year() {
            1959 => &[(
                "crownPrinceAkihitoWedding",
                4,
                10,
                "Wedding of Crown Prince Akihito",
                "皇太子明仁親王の結婚の儀",
            )],
            1989 => &[(
                "emperorShowaFuneral",
                2,
                24,
                "Funeral of Emperor Showa",
                "昭和天皇の大喪の礼",
            )],
            1990 => &[(
                "enthronementCeremony",
                11,
                12,
                "Enthronement Ceremony",
                "即位礼正殿の儀",
            )],
            1993 => &[(
                "crownPrinceNaruhitoWedding",
                6,
                9,
                "Wedding of Crown Prince Naruhito",
                "皇太子徳仁親王の結婚の儀",
            )],
            2019 => &[
                ("coronationDay", 5, 1, "Coronation Day", "即位の日"),
                ("enthronementCeremony", 10, 22, "Enthronement Ceremony", "即位礼正殿の儀"),
            ],
            _ => &[],
        };
        for &(key, month, day, en, ja) in specials {
            holidays.add(ctx.fixed(
                key,
                month,
                day,
                &[("en", en), ("ja", ja)],
                HolidayType::Official,
            )?);
        }
        Ok(())
    }

    fn substitute_holidays(year: i32, holidays: &mut HolidayCollection) -> AlmanacResult<()> {
        let policy = SubstitutionPolicy::new([Weekday::Sun], ShiftRule::FixedDays(1));
        let policy = if year >= 2007 {
            policy.with_collision(CollisionRule::SkipForward)
        } else {
            policy
                .with_collision(CollisionRule::Drop)
                .effective_from(Date::from_ymd(1973, 4, 12)?)
        };
        policy.apply(holidays)?;
        Ok(())
    }

    fn bridge_holidays(
        ctx: &ProviderContext<'_>,
        holidays: &mut HolidayCollection,
    ) -> AlmanacResult<()> {
        if ctx.year() < 1986 {
            return Ok(());
        }
        let gaps: Vec<Date> = bridge_days(holidays)
            .filter(|day| day.weekday() != Weekday::Sun)
            .collect();

        for (n, day) in gaps.into_iter().enumerate() {
            let key = format!("bridgeDay{}", n + 1);
            trace!(%key, %day, "bridge holiday");
            holidays.add(ctx.holiday(
                &key,
                ZonedDate::new(day, ctx.timezone()),
                &[("en", "Bridge Public holiday"), ("ja", "国民の休日")],
                HolidayType::Official,
            )?);
        }
        Ok(())
    }
}

impl Provider for Japan {
    fn id(&self) -> &'static str {
        "Japan"
    }

    fn iso_code(&self) -> &'static str {
        "JP"
    }

    fn timezone(&self) -> &'static str {
        "Asia/Tokyo"
    }

    fn compute(&self, ctx: &ProviderContext<'_>) -> AlmanacResult<HolidayCollection> {
        let year = ctx.year();
        let mut holidays = ctx.collection(self);
        if year < HOLIDAY_LAW_SINCE {
            return Ok(holidays);
        }

        Self::fixed_holidays(ctx, &mut holidays)?;
        Self::happy_monday_holidays(ctx, &mut holidays)?;
        Self::imperial_holidays(ctx, &mut holidays)?;
        Self::substitute_holidays(year, &mut holidays)?;
        Self::bridge_holidays(ctx, &mut holidays)?;

        debug!(provider = self.id(), year, count = holidays.len(), "holidays computed");
        Ok(holidays)
    }
}
