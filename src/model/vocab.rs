//! Vocabulary IRIs used by the models and queries

pub mod rdf {
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    pub const LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";
}

pub mod xsd {
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    pub const BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
    pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
    pub const DECIMAL: &str = "http://www.w3.org/2001/XMLSchema#decimal";
    pub const DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";
    pub const FLOAT: &str = "http://www.w3.org/2001/XMLSchema#float";
    pub const DATE: &str = "http://www.w3.org/2001/XMLSchema#date";
    pub const DATE_TIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";

    /// Datatypes compared numerically
    pub const NUMERIC: &[&str] = &[
        INTEGER,
        DECIMAL,
        DOUBLE,
        FLOAT,
        "http://www.w3.org/2001/XMLSchema#int",
        "http://www.w3.org/2001/XMLSchema#long",
        "http://www.w3.org/2001/XMLSchema#short",
        "http://www.w3.org/2001/XMLSchema#byte",
        "http://www.w3.org/2001/XMLSchema#nonNegativeInteger",
        "http://www.w3.org/2001/XMLSchema#positiveInteger",
        "http://www.w3.org/2001/XMLSchema#nonPositiveInteger",
        "http://www.w3.org/2001/XMLSchema#negativeInteger",
        "http://www.w3.org/2001/XMLSchema#unsignedInt",
        "http://www.w3.org/2001/XMLSchema#unsignedLong",
        "http://www.w3.org/2001/XMLSchema#unsignedShort",
        "http://www.w3.org/2001/XMLSchema#unsignedByte",
    ];
}

pub mod schema {
    macro_rules! schema_terms {
        ($($name:ident => $local:literal),* $(,)?) => {
            $(pub const $name: &str = concat!("http://schema.org/", $local);)*
        };
    }

    schema_terms! {
        // Classes
        BROADCAST_EVENT => "BroadcastEvent",
        BROADCAST_SERVICE => "BroadcastService",
        CREATIVE_WORK => "CreativeWork",
        EVENT => "Event",
        MUSIC_ALBUM => "MusicAlbum",
        MUSIC_COMPOSITION => "MusicComposition",
        MUSIC_GROUP => "MusicGroup",
        MUSIC_PLAYLIST => "MusicPlaylist",
        MUSIC_RECORDING => "MusicRecording",
        ORGANIZATION => "Organization",
        PERSON => "Person",
        PUBLICATION_EVENT => "PublicationEvent",
        RADIO_BROADCAST_SERVICE => "RadioBroadcastService",
        RADIO_EPISODE => "RadioEpisode",
        RADIO_SERIES => "RadioSeries",
        ROLE => "Role",
        THING => "Thing",
        // Properties
        BROADCAST_TIMEZONE => "broadcastTimezone",
        BY_ARTIST => "byArtist",
        CALL_SIGN => "callSign",
        COMPOSER => "composer",
        DESCRIPTION => "description",
        DURATION => "duration",
        END_DATE => "endDate",
        FAMILY_NAME => "familyName",
        GIVEN_NAME => "givenName",
        IN_ALBUM => "inAlbum",
        JOB_TITLE => "jobTitle",
        MEMBER => "member",
        MEMBER_OF => "memberOf",
        NAME => "name",
        PART_OF_SERIES => "partOfSeries",
        POSITION => "position",
        PUBLICATION => "publication",
        PUBLISHED_ON => "publishedOn",
        RECORDING_OF => "recordingOf",
        ROLE_NAME => "roleName",
        SAME_AS => "sameAs",
        START_DATE => "startDate",
        SUB_EVENT => "subEvent",
        SUPER_EVENT => "superEvent",
        URL => "url",
        WORK_PERFORMED => "workPerformed",
    }
}

/// Music role names
pub mod sdapps {
    pub const MUSIC_CONDUCTOR_ROLE_NAME: &str = "http://purl.org/sdapps/ontology#MusicConductorRoleName";
    pub const MUSIC_ENSEMBLE_ROLE_NAME: &str = "http://purl.org/sdapps/ontology#MusicEnsembleRoleName";
    pub const MUSIC_SOLOIST_ROLE_NAME: &str = "http://purl.org/sdapps/ontology#MusicSoloistRoleName";
}
