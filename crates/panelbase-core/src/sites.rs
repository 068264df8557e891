//! Site records for known outdoor-media organizations.
//!
//! The catalog is a compiled-in fact table. Records are reproduced exactly as
//! maintained by the data owners, gaps included: `Ad-Vantage Media - Roadside -
//! Digital` carries no site class, and two MediaWorks records spell the client
//! `Mediaworks`.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PanelProduct {
    Roadside,
    Placebased,
}

impl PanelProduct {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Roadside => "Roadside",
            Self::Placebased => "Placebased",
        }
    }
}

impl fmt::Display for PanelProduct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PanelFormat {
    Classic,
    Digital,
}

impl PanelFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Classic => "Classic",
            Self::Digital => "Digital",
        }
    }
}

impl fmt::Display for PanelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Site classification used for audience modelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SiteClass {
    /// Roadside.
    #[serde(rename = "RS")]
    Rs,
    /// Place-based, shopping centre.
    #[serde(rename = "PB_SC")]
    PbSc,
    /// Place-based, airport.
    #[serde(rename = "PB_AP")]
    PbAp,
}

impl SiteClass {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rs => "RS",
            Self::PbSc => "PB_SC",
            Self::PbAp => "PB_AP",
        }
    }
}

impl fmt::Display for SiteClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One organization entry (a media owner's product line) in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteRecord {
    pub client_name: Option<&'static str>,
    pub organization_name: &'static str,
    /// 24 hex digit document id.
    pub organization_id: &'static str,
    pub panel_product: Option<PanelProduct>,
    pub panel_format: Option<PanelFormat>,
    pub archived: bool,
    pub site_class: Option<SiteClass>,
    pub site_sub_class: Option<SiteClass>,
}

impl SiteRecord {
    /// Not archived.
    pub fn is_active(&self) -> bool {
        !self.archived
    }
}

/// A named group of site records (a reseller or class of organizations).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogGroup {
    pub name: &'static str,
    pub sites: &'static [SiteRecord],
}

pub static SUPPORTED_ORGANIZATIONS: &[CatalogGroup] = &[
    CatalogGroup {
        name: "Calibre",
        sites: CALIBRE,
    },
    CatalogGroup {
        name: "MediaOwners",
        sites: MEDIA_OWNERS,
    },
];

const CALIBRE: &[SiteRecord] = &[
    SiteRecord {
        client_name: None,
        organization_name: "Calibre-Sites",
        organization_id: "60b31bcd8e1e1fde00bf3706",
        panel_product: Some(PanelProduct::Roadside),
        panel_format: None,
        archived: false,
        site_class: Some(SiteClass::Rs),
        site_sub_class: Some(SiteClass::Rs),
    },
    SiteRecord {
        client_name: None,
        organization_name: "Calibre - Place Based",
        organization_id: "62eb8a9bb3cfc8578d78efb8",
        panel_product: Some(PanelProduct::Placebased),
        panel_format: None,
        archived: false,
        site_class: Some(SiteClass::PbSc),
        site_sub_class: Some(SiteClass::PbSc),
    },
];

const MEDIA_OWNERS: &[SiteRecord] = &[
    SiteRecord {
        client_name: Some("oOh Media"),
        organization_name: "oOh Media - Retail Panels",
        organization_id: "62202ff63a20c0394efe4dc6",
        panel_product: Some(PanelProduct::Placebased),
        panel_format: None,
        archived: true,
        site_class: Some(SiteClass::PbSc),
        site_sub_class: Some(SiteClass::PbSc),
    },
    SiteRecord {
        client_name: Some("oOh Media"),
        organization_name: "oOh Media - Street Furniture",
        organization_id: "629f165d4cd545e19c36e489",
        panel_product: Some(PanelProduct::Roadside),
        panel_format: None,
        archived: true,
        site_class: Some(SiteClass::Rs),
        site_sub_class: Some(SiteClass::Rs),
    },
    SiteRecord {
        client_name: Some("oOh Media"),
        organization_name: "oOhMedia - Roadside - Classic",
        organization_id: "66f10d3bc7e9bf6c5950c2bb",
        panel_product: Some(PanelProduct::Roadside),
        panel_format: Some(PanelFormat::Classic),
        archived: false,
        site_class: Some(SiteClass::Rs),
        site_sub_class: Some(SiteClass::Rs),
    },
    SiteRecord {
        client_name: Some("oOh Media"),
        organization_name: "oOhMedia - Roadside - Digital",
        organization_id: "66f10d3bc7e9bf6c5950c2ba",
        panel_product: Some(PanelProduct::Roadside),
        panel_format: Some(PanelFormat::Digital),
        archived: false,
        site_class: Some(SiteClass::Rs),
        site_sub_class: Some(SiteClass::Rs),
    },
    SiteRecord {
        client_name: Some("oOh Media"),
        organization_name: "oOhMedia - ShoppingCentre - Classic",
        organization_id: "66f10d3bc7e9bf6c5950c2bc",
        panel_product: Some(PanelProduct::Placebased),
        panel_format: Some(PanelFormat::Classic),
        archived: false,
        site_class: Some(SiteClass::PbSc),
        site_sub_class: Some(SiteClass::PbSc),
    },
    SiteRecord {
        client_name: Some("oOh Media"),
        organization_name: "oOhMedia - ShoppingCentre - Digital",
        organization_id: "66f10d3bc7e9bf6c5950c2bd",
        panel_product: Some(PanelProduct::Placebased),
        panel_format: Some(PanelFormat::Digital),
        archived: false,
        site_class: Some(SiteClass::PbSc),
        site_sub_class: Some(SiteClass::PbSc),
    },
    SiteRecord {
        client_name: Some("JCDecaux"),
        organization_name: "JCDecaux - Airport - Digital",
        organization_id: "66b1bbf394c91b1e4b777287",
        panel_product: Some(PanelProduct::Placebased),
        panel_format: Some(PanelFormat::Digital),
        archived: false,
        site_class: Some(SiteClass::PbAp),
        site_sub_class: Some(SiteClass::PbAp),
    },
    SiteRecord {
        client_name: Some("JCDecaux"),
        organization_name: "JCDecaux - Airport - Classic",
        organization_id: "66ceac5a2a46524df7d5603e",
        panel_product: Some(PanelProduct::Placebased),
        panel_format: Some(PanelFormat::Classic),
        archived: false,
        site_class: Some(SiteClass::PbAp),
        site_sub_class: Some(SiteClass::PbAp),
    },
    SiteRecord {
        client_name: Some("JCDecaux"),
        organization_name: "JCDecaux - Roadside - Classic",
        organization_id: "66ceac5a2a46524df7d5603f",
        panel_product: Some(PanelProduct::Roadside),
        panel_format: Some(PanelFormat::Classic),
        archived: false,
        site_class: Some(SiteClass::Rs),
        site_sub_class: Some(SiteClass::Rs),
    },
    SiteRecord {
        client_name: Some("JCDecaux"),
        organization_name: "JCDecaux - Roadside - Digital",
        organization_id: "66ce9d092a46524df7d55fbb",
        panel_product: Some(PanelProduct::Roadside),
        panel_format: Some(PanelFormat::Digital),
        archived: false,
        site_class: Some(SiteClass::Rs),
        site_sub_class: Some(SiteClass::Rs),
    },
    SiteRecord {
        client_name: Some("VAST Billboards"),
        organization_name: "VAST Billboards - Roadside - Digital",
        organization_id: "66de4f84c005a7e4b04b3235",
        panel_product: Some(PanelProduct::Roadside),
        panel_format: Some(PanelFormat::Digital),
        archived: false,
        site_class: Some(SiteClass::Rs),
        site_sub_class: Some(SiteClass::Rs),
    },
    SiteRecord {
        client_name: Some("VAST Billboards"),
        organization_name: "VAST Billboards - Roadside - Classic",
        organization_id: "66de4f83c005a7e4b04b3234",
        panel_product: Some(PanelProduct::Roadside),
        panel_format: Some(PanelFormat::Classic),
        archived: false,
        site_class: Some(SiteClass::Rs),
        site_sub_class: Some(SiteClass::Rs),
    },
    SiteRecord {
        client_name: Some("JOLT"),
        organization_name: "JOLT",
        organization_id: "65544188397e42fb7d0055cb",
        panel_product: None,
        panel_format: None,
        archived: true,
        site_class: None,
        site_sub_class: None,
    },
    SiteRecord {
        client_name: Some("JOLT"),
        organization_name: "JOLT - Roadside - Digital",
        organization_id: "66de4f1bc005a7e4b04b3228",
        panel_product: Some(PanelProduct::Roadside),
        panel_format: Some(PanelFormat::Digital),
        archived: false,
        site_class: Some(SiteClass::Rs),
        site_sub_class: Some(SiteClass::Rs),
    },
    SiteRecord {
        client_name: Some("MediaWorks"),
        organization_name: "MediaWorks - Airport - Classic",
        organization_id: "66d1ac9cdfac96b384da9b17",
        panel_product: Some(PanelProduct::Placebased),
        panel_format: Some(PanelFormat::Classic),
        archived: false,
        site_class: Some(SiteClass::PbAp),
        site_sub_class: Some(SiteClass::PbAp),
    },
    SiteRecord {
        client_name: Some("MediaWorks"),
        organization_name: "MediaWorks - Airport - Digital",
        organization_id: "66d1abc1dfac96b384da99e6",
        panel_product: Some(PanelProduct::Placebased),
        panel_format: Some(PanelFormat::Digital),
        archived: false,
        site_class: Some(SiteClass::PbAp),
        site_sub_class: Some(SiteClass::PbAp),
    },
    SiteRecord {
        client_name: Some("MediaWorks"),
        organization_name: "MediaWorks - Roadside - Classic",
        organization_id: "66d1ac9cdfac96b384da9b18",
        panel_product: Some(PanelProduct::Roadside),
        panel_format: Some(PanelFormat::Classic),
        archived: false,
        site_class: Some(SiteClass::Rs),
        site_sub_class: Some(SiteClass::Rs),
    },
    SiteRecord {
        client_name: Some("MediaWorks"),
        organization_name: "MediaWorks - Roadside - Digital",
        organization_id: "66d1abc1dfac96b384da99e8",
        panel_product: Some(PanelProduct::Roadside),
        panel_format: Some(PanelFormat::Digital),
        archived: false,
        site_class: Some(SiteClass::Rs),
        site_sub_class: Some(SiteClass::Rs),
    },
    SiteRecord {
        client_name: Some("Mediaworks"),
        organization_name: "MediaWorks - Shopping Centre - Classic",
        organization_id: "67be6b7996e30f9cb0936a3e",
        panel_product: Some(PanelProduct::Placebased),
        panel_format: Some(PanelFormat::Classic),
        archived: false,
        site_class: Some(SiteClass::PbSc),
        site_sub_class: Some(SiteClass::PbSc),
    },
    SiteRecord {
        client_name: Some("Mediaworks"),
        organization_name: "MediaWorks - Shopping Centre - Digital",
        organization_id: "67be6b7996e30f9cb0936a3f",
        panel_product: Some(PanelProduct::Placebased),
        panel_format: Some(PanelFormat::Digital),
        archived: false,
        site_class: Some(SiteClass::PbSc),
        site_sub_class: Some(SiteClass::PbSc),
    },
    SiteRecord {
        client_name: Some("Bekon"),
        organization_name: "Bekon - Roadside - Digital",
        organization_id: "66de4f83c005a7e4b04b322d",
        panel_product: Some(PanelProduct::Roadside),
        panel_format: Some(PanelFormat::Digital),
        archived: false,
        site_class: Some(SiteClass::Rs),
        site_sub_class: Some(SiteClass::Rs),
    },
    SiteRecord {
        client_name: Some("Go Media - sales"),
        organization_name: "GoMedia - Roadside - Classic",
        organization_id: "66ea6165c7e9bf6c5950c2b6",
        panel_product: Some(PanelProduct::Roadside),
        panel_format: Some(PanelFormat::Classic),
        archived: false,
        site_class: Some(SiteClass::Rs),
        site_sub_class: Some(SiteClass::Rs),
    },
    SiteRecord {
        client_name: Some("Go Media - sales"),
        organization_name: "GoMedia - Roadside - Digital",
        organization_id: "66ea6166c7e9bf6c5950c2b7",
        panel_product: Some(PanelProduct::Roadside),
        panel_format: Some(PanelFormat::Digital),
        archived: false,
        site_class: Some(SiteClass::Rs),
        site_sub_class: Some(SiteClass::Rs),
    },
    SiteRecord {
        client_name: Some("Go Media - sales"),
        organization_name: "GoMedia - Airport - Digital",
        organization_id: "67c4fb6f6b52ef7d5c354819",
        panel_product: Some(PanelProduct::Placebased),
        panel_format: Some(PanelFormat::Digital),
        archived: false,
        site_class: Some(SiteClass::PbAp),
        site_sub_class: Some(SiteClass::PbAp),
    },
    SiteRecord {
        client_name: Some("LUMO"),
        organization_name: "LUMO - Roadside - Digital",
        organization_id: "66f29f96bd6ba976cf04bb79",
        panel_product: Some(PanelProduct::Roadside),
        panel_format: Some(PanelFormat::Digital),
        archived: false,
        site_class: Some(SiteClass::Rs),
        site_sub_class: Some(SiteClass::Rs),
    },
    SiteRecord {
        client_name: Some("Ad-Vantage Media"),
        organization_name: "Ad-Vantage Media",
        organization_id: "5f7fbd46159345000459c2e4",
        panel_product: Some(PanelProduct::Roadside),
        panel_format: None,
        archived: true,
        site_class: Some(SiteClass::Rs),
        site_sub_class: Some(SiteClass::Rs),
    },
    SiteRecord {
        client_name: Some("Ad-Vantage Media"),
        organization_name: "Ad-Vantage Media - Roadside - Digital",
        organization_id: "67db88fc3ee9d3b7115cae04",
        panel_product: Some(PanelProduct::Roadside),
        panel_format: Some(PanelFormat::Digital),
        archived: false,
        site_class: None,
        site_sub_class: None,
    },
    SiteRecord {
        client_name: Some("Ad-Vantage Media"),
        organization_name: "Ad-Vantage Media - Roadside - Classic",
        organization_id: "67db88fc3ee9d3b7115cae05",
        panel_product: Some(PanelProduct::Roadside),
        panel_format: Some(PanelFormat::Classic),
        archived: false,
        site_class: Some(SiteClass::Rs),
        site_sub_class: Some(SiteClass::Rs),
    },
    SiteRecord {
        client_name: Some("Media5"),
        organization_name: "Media5",
        organization_id: "5f7fbdaf159345000459c2ea",
        panel_product: Some(PanelProduct::Roadside),
        panel_format: None,
        archived: true,
        site_class: Some(SiteClass::Rs),
        site_sub_class: Some(SiteClass::Rs),
    },
    SiteRecord {
        client_name: Some("Media5"),
        organization_name: "Media5 - Roadside - Classic",
        organization_id: "66de4f83c005a7e4b04b322e",
        panel_product: Some(PanelProduct::Roadside),
        panel_format: Some(PanelFormat::Classic),
        archived: false,
        site_class: Some(SiteClass::Rs),
        site_sub_class: Some(SiteClass::Rs),
    },
    SiteRecord {
        client_name: Some("Media5"),
        organization_name: "Media5 - Roadside - Digital",
        organization_id: "66de4f83c005a7e4b04b322f",
        panel_product: Some(PanelProduct::Roadside),
        panel_format: Some(PanelFormat::Digital),
        archived: false,
        site_class: Some(SiteClass::Rs),
        site_sub_class: Some(SiteClass::Rs),
    },
];
