use crate::utils::UriUtils;

pub const UNKNOWN_STADIUM: &str = "Unknown Stadium";

/// Served from the static directory, see the web crate's routes.
const CREST_FOLDER: &str = "/static/crests";

const STADIUMS: &[(&str, &str)] = &[
    ("Arsenal", "Emirates Stadium"),
    ("Aston Villa", "Villa Park"),
    ("Bournemouth", "Vitality Stadium"),
    ("Brentford", "Gtech Community Stadium"),
    ("Brighton", "Amex Stadium"),
    ("Chelsea", "Stamford Bridge"),
    ("Crystal Palace", "Selhurst Park"),
    ("Everton", "Goodison Park"),
    ("Fulham", "Craven Cottage"),
    ("Ipswich Town", "Portman Road"),
    ("Leicester City", "King Power Stadium"),
    ("Liverpool", "Anfield"),
    ("Manchester City", "Etihad Stadium"),
    ("Manchester United", "Old Trafford"),
    ("Newcastle United", "St. James' Park"),
    ("Nottingham Forest", "City Ground"),
    ("Southampton", "St. Mary's Stadium"),
    ("Tottenham Hotspur", "Tottenham Hotspur Stadium"),
    ("West Ham United", "London Stadium"),
    ("Wolverhampton", "Molineux Stadium"),
];

pub struct VenueDirectory;

impl VenueDirectory {
    pub fn stadium(team_name: &str) -> &'static str {
        STADIUMS
            .iter()
            .find(|(team, _)| *team == team_name)
            .map(|(_, stadium)| *stadium)
            .unwrap_or(UNKNOWN_STADIUM)
    }

    pub fn crest(team_name: &str) -> String {
        format!("{}/{}.png", CREST_FOLDER, UriUtils::encode_component(team_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stadium_lookup() {
        assert_eq!(VenueDirectory::stadium("Liverpool"), "Anfield");
        assert_eq!(VenueDirectory::stadium("Newcastle United"), "St. James' Park");
        assert_eq!(VenueDirectory::stadium("Sunderland"), UNKNOWN_STADIUM);
        assert_eq!(VenueDirectory::stadium(""), UNKNOWN_STADIUM);
    }

    #[test]
    fn test_crest_path() {
        assert_eq!(
            VenueDirectory::crest("Aston Villa"),
            "/static/crests/Aston%20Villa.png"
        );
    }
}
