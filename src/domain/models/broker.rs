// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// Risk tier of a data-broker site.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BrokerRisk {
    High,
    Standard,
}

/// One entry of the static broker directory. Listings on these domains are
/// always treated as relevant to a scan regardless of name match.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BrokerListing {
    pub domain: &'static str,
    pub risk: BrokerRisk,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub removal_url: Option<&'static str>,
}

const fn broker(
    domain: &'static str,
    risk: BrokerRisk,
    removal_url: Option<&'static str>,
) -> BrokerListing {
    BrokerListing {
        domain,
        risk,
        removal_url,
    }
}

/// Known people-search and public-records aggregators. Domains are stored
/// lowercase; hostname checks must lowercase before comparing.
pub const BROKER_DIRECTORY: &[BrokerListing] = &[
    broker(
        "spokeo.com",
        BrokerRisk::High,
        Some("https://www.spokeo.com/optout"),
    ),
    broker(
        "whitepages.com",
        BrokerRisk::High,
        Some("https://www.whitepages.com/suppression-requests"),
    ),
    broker(
        "radaris.com",
        BrokerRisk::High,
        Some("https://radaris.com/control/privacy"),
    ),
    broker(
        "truepeoplesearch.com",
        BrokerRisk::Standard,
        Some("https://www.truepeoplesearch.com/removal"),
    ),
    broker(
        "fastpeoplesearch.com",
        BrokerRisk::Standard,
        Some("https://www.fastpeoplesearch.com/removal"),
    ),
    broker(
        "beenverified.com",
        BrokerRisk::High,
        Some("https://www.beenverified.com/app/optout/search"),
    ),
    broker(
        "truthfinder.com",
        BrokerRisk::High,
        Some("https://www.truthfinder.com/opt-out/"),
    ),
    broker(
        "instantcheckmate.com",
        BrokerRisk::High,
        Some("https://www.instantcheckmate.com/opt-out/"),
    ),
    broker(
        "intelius.com",
        BrokerRisk::High,
        Some("https://www.intelius.com/opt-out"),
    ),
    broker("nuwber.com", BrokerRisk::Standard, None),
    broker(
        "peoplefinders.com",
        BrokerRisk::Standard,
        Some("https://www.peoplefinders.com/opt-out"),
    ),
    broker("ussearch.com", BrokerRisk::Standard, None),
    broker("peekyou.com", BrokerRisk::Standard, None),
    broker("mylife.com", BrokerRisk::High, None),
    broker("zabasearch.com", BrokerRisk::Standard, None),
    broker("thatsthem.com", BrokerRisk::Standard, None),
    broker("clustrmaps.com", BrokerRisk::Standard, None),
    broker("cyberbackgroundchecks.com", BrokerRisk::Standard, None),
    broker("publicrecords.com", BrokerRisk::Standard, None),
    broker("addresses.com", BrokerRisk::Standard, None),
    broker("anywho.com", BrokerRisk::Standard, None),
    broker("411.com", BrokerRisk::Standard, None),
    broker("peoplesearchnow.com", BrokerRisk::Standard, None),
    broker("advancedbackgroundchecks.com", BrokerRisk::Standard, None),
    broker("familytreenow.com", BrokerRisk::Standard, None),
    broker("searchpeoplefree.com", BrokerRisk::Standard, None),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_domains_are_lowercase() {
        for listing in BROKER_DIRECTORY {
            assert_eq!(listing.domain, listing.domain.to_lowercase());
        }
    }

    #[test]
    fn test_directory_serialization() {
        let json = serde_json::to_value(&BROKER_DIRECTORY[0]).unwrap();
        assert_eq!(json["domain"], "spokeo.com");
        assert_eq!(json["risk"], "high");
        assert_eq!(json["removalUrl"], "https://www.spokeo.com/optout");
    }
}
