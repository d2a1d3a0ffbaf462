use time::format_description::FormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

#[cfg(test)]
mod inner {
    use time::macros::datetime;
    use time::OffsetDateTime;

    pub fn now_utc() -> OffsetDateTime {
        datetime!(2022-08-01 12:34:56 UTC)
    }

    pub fn now_local() -> OffsetDateTime {
        datetime!(2022-08-01 05:34:56 UTC)
    }
}

#[cfg(not(test))]
mod inner {
    use time::OffsetDateTime;

    pub fn now_utc() -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }

    pub fn now_local() -> OffsetDateTime {
        // the local offset is unknowable on some platforms. a utc
        // timestamp only shifts a display string, so use it instead
        OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
    }
}

const GENERAL: &[FormatItem<'static>] =
    format_description!("[month]/[day]/[year] [hour]:[minute]:[second]");

pub fn now_utc() -> String {
    render(inner::now_utc())
}

pub fn now_local() -> String {
    render(inner::now_local())
}

fn render(at: OffsetDateTime) -> String {
    at.format(GENERAL).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    #[test]
    fn general_format() {
        assert_eq!(super::now_utc(), "08/01/2022 12:34:56");
        assert_eq!(super::now_local(), "08/01/2022 05:34:56");
    }
}
