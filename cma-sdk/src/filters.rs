// ABOUTME: Artwork search filters and query-string assembly for the CMA API
// ABOUTME: Explicit struct enumerating every optional filter field and boolean flag

/// Optional filters accepted by the `/artworks/` collection endpoint.
///
/// Unset values, empty strings, and zero integers are all omitted from the
/// query, matching the upstream wrapper's convention. As a consequence
/// `has_image=0` and `limit=0` cannot be expressed; callers relying on those
/// must talk to the API directly. The `dimensions*` filters are passed
/// through verbatim as `f,f,f` strings in meters.
#[derive(Debug, Default, Clone)]
pub struct ArtworkFilters {
    /// Keyword or phrase matched against title, creator, description, and
    /// other meaningful fields
    pub q: Option<String>,
    /// Filter by department
    pub department: Option<String>,
    /// Filter by artwork type
    pub artwork_type: Option<String>,
    /// 0 or 1, return only artworks that have a web image asset
    pub has_image: Option<i64>,
    /// Number of spaces the API indents JSON content with
    pub indent: Option<i64>,
    /// Offset index for results
    pub skip: Option<i64>,
    /// Limit for number of results
    pub limit: Option<i64>,
    /// Filter by name of artist
    pub artists: Option<String>,
    /// Filter by title of artwork
    pub title: Option<String>,
    /// Filter by artwork medium
    pub medium: Option<String>,
    /// Filter by dimensions with 20cm fault tolerance
    pub dimensions: Option<String>,
    /// Return works that fit inside the described box
    pub dimensions_max: Option<String>,
    /// Return works that cannot fit inside the described box
    pub dimensions_min: Option<String>,
    /// Filter by credit line
    pub credit: Option<String>,
    /// Filter by catalogue raisonne
    pub catalogue_raisonne: Option<String>,
    /// Filter by provenance of artwork
    pub provenance: Option<String>,
    /// Keyword search against the citations field
    pub citations: Option<String>,
    /// Filter by exhibition history of artwork
    pub exhibition_history: Option<String>,
    /// Works created before the year specified, negative years are BCE
    pub created_before: Option<i64>,
    /// Works created after the year specified, negative years are BCE
    pub created_after: Option<i64>,
    /// Artist older than the value in years at time of creation
    pub created_after_age: Option<i64>,
    /// Artist younger than the value in years at time of creation
    pub created_before_age: Option<i64>,

    /// Works with share license cc0
    pub cc0: bool,
    /// Works with some sort of copyright
    pub copyrighted: bool,
    /// Works currently on view at CMA
    pub currently_on_view: bool,
    /// Works currently on loan
    pub currently_on_loan: bool,
    /// Works created by African American artists
    pub african_american_artists: bool,
    /// Works created by Cleveland Institute of Art alumni
    pub cia_alumni_artists: bool,
    /// Works exhibited in CMA May Shows
    pub may_show_artists: bool,
    /// Works created by female artists
    pub female_artists: bool,
    /// Works acquired by the museum in the last three years
    pub recently_acquired: bool,
    /// Works with nazi-era provenance
    pub nazi_era_provenance: bool,
}

impl ArtworkFilters {
    /// Value filters that are actually set, in declaration order.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_text(&mut pairs, "q", &self.q);
        push_text(&mut pairs, "department", &self.department);
        push_text(&mut pairs, "type", &self.artwork_type);
        push_int(&mut pairs, "has_image", &self.has_image);
        push_int(&mut pairs, "indent", &self.indent);
        push_int(&mut pairs, "skip", &self.skip);
        push_int(&mut pairs, "limit", &self.limit);
        push_text(&mut pairs, "artists", &self.artists);
        push_text(&mut pairs, "title", &self.title);
        push_text(&mut pairs, "medium", &self.medium);
        push_text(&mut pairs, "dimensions", &self.dimensions);
        push_text(&mut pairs, "dimensions_max", &self.dimensions_max);
        push_text(&mut pairs, "dimensions_min", &self.dimensions_min);
        push_text(&mut pairs, "credit", &self.credit);
        push_text(&mut pairs, "catalogue_raisonne", &self.catalogue_raisonne);
        push_text(&mut pairs, "provenance", &self.provenance);
        push_text(&mut pairs, "citations", &self.citations);
        push_text(&mut pairs, "exhibition_history", &self.exhibition_history);
        push_int(&mut pairs, "created_before", &self.created_before);
        push_int(&mut pairs, "created_after", &self.created_after);
        push_int(&mut pairs, "created_after_age", &self.created_after_age);
        push_int(&mut pairs, "created_before_age", &self.created_before_age);
        pairs
    }

    /// Boolean filters that are set, as bare query-string keys.
    pub fn flags(&self) -> Vec<&'static str> {
        let mut flags = Vec::new();
        let fields = [
            ("cc0", self.cc0),
            ("copyrighted", self.copyrighted),
            ("currently_on_view", self.currently_on_view),
            ("currently_on_loan", self.currently_on_loan),
            ("african_american_artists", self.african_american_artists),
            ("cia_alumni_artists", self.cia_alumni_artists),
            ("may_show_artists", self.may_show_artists),
            ("female_artists", self.female_artists),
            ("recently_acquired", self.recently_acquired),
            ("nazi_era_provenance", self.nazi_era_provenance),
        ];
        for (name, set) in fields {
            if set {
                flags.push(name);
            }
        }
        flags
    }

    /// The `&`-joined flag segment that leads the query string, e.g.
    /// `cc0&currently_on_view`. `None` when no flag is set.
    pub fn flag_segment(&self) -> Option<String> {
        let flags = self.flags();
        if flags.is_empty() {
            None
        } else {
            Some(flags.join("&"))
        }
    }

    pub fn is_empty(&self) -> bool {
        self.query_pairs().is_empty() && self.flags().is_empty()
    }
}

fn push_text(pairs: &mut Vec<(&'static str, String)>, key: &'static str, value: &Option<String>) {
    if let Some(value) = value {
        if !value.is_empty() {
            pairs.push((key, value.clone()));
        }
    }
}

fn push_int(pairs: &mut Vec<(&'static str, String)>, key: &'static str, value: &Option<i64>) {
    if let Some(value) = value {
        if *value != 0 {
            pairs.push((key, value.to_string()));
        }
    }
}
