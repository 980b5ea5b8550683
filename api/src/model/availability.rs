use chrono::NaiveDate;
use garde::Validate;
use kernel::model::{
    availability::{AvailabilityRange, BookedDay, BookedSpace, DayStatus},
    id::SpaceId,
    reservation::ReservationStatus,
};
use serde::{Deserialize, Serialize};

fn not_before(
    from: &Option<NaiveDate>,
) -> impl FnOnce(&Option<NaiveDate>, &()) -> garde::Result + '_ {
    move |to, _| match (from, to) {
        (Some(from), Some(to)) if to < from => {
            Err(garde::Error::new("`to` must not be earlier than `from`"))
        }
        _ => Ok(()),
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct AvailabilityQuery {
    #[garde(skip)]
    pub from: Option<NaiveDate>,
    #[garde(custom(not_before(&self.from)))]
    pub to: Option<NaiveDate>,
}

impl From<AvailabilityQuery> for AvailabilityRange {
    fn from(value: AvailabilityQuery) -> Self {
        let AvailabilityQuery { from, to } = value;
        AvailabilityRange { from, to }
    }
}

/// 公開サイト向け。日付と分類だけを返し、予約の中身は出さない。
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicAvailabilityResponse {
    pub days: Vec<PublicDayResponse>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicDayResponse {
    pub date: NaiveDate,
    pub status: Option<DayStatus>,
}

impl From<Vec<BookedDay>> for PublicAvailabilityResponse {
    fn from(value: Vec<BookedDay>) -> Self {
        Self {
            days: value
                .into_iter()
                .map(|day| PublicDayResponse {
                    date: day.date,
                    status: day.status(),
                })
                .collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminAvailabilityResponse {
    pub days: Vec<AdminDayResponse>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminDayResponse {
    pub date: NaiveDate,
    pub status: Option<DayStatus>,
    pub spaces: Vec<BookedSpaceResponse>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookedSpaceResponse {
    pub space_id: SpaceId,
    pub space_name: String,
    pub status: ReservationStatus,
}

impl From<BookedSpace> for BookedSpaceResponse {
    fn from(value: BookedSpace) -> Self {
        let BookedSpace {
            space_id,
            space_name,
            status,
        } = value;
        Self {
            space_id,
            space_name,
            status,
        }
    }
}

impl From<BookedDay> for AdminDayResponse {
    fn from(value: BookedDay) -> Self {
        let status = value.status();
        let BookedDay { date, spaces } = value;
        Self {
            date,
            status,
            spaces: spaces.into_iter().map(BookedSpaceResponse::from).collect(),
        }
    }
}

impl From<Vec<BookedDay>> for AdminAvailabilityResponse {
    fn from(value: Vec<BookedDay>) -> Self {
        Self {
            days: value.into_iter().map(AdminDayResponse::from).collect(),
        }
    }
}
