//! Built-in variant seed for the applicant profile schema.
//!
//! Variants are listed as they appear in the wild; the table normalizes them
//! on load, so several raw spellings may collapse into one stored variant.

pub(crate) const BUILTIN_VARIANTS: &[(&str, &[&str])] = &[
    // Personal information
    (
        "firstName",
        &[
            "first_name",
            "firstname",
            "fname",
            "given_name",
            "forename",
            "first-name",
            "name_first",
            "applicant_first_name",
            "user_firstname",
            "personal_first_name",
            "candidate_first_name",
        ],
    ),
    (
        "lastName",
        &[
            "last_name",
            "lastname",
            "lname",
            "surname",
            "family_name",
            "last-name",
            "name_last",
            "applicant_last_name",
            "user_lastname",
            "personal_last_name",
            "candidate_last_name",
        ],
    ),
    (
        "fullName",
        &[
            "full_name",
            "fullname",
            "name",
            "complete_name",
            "applicant_name",
            "full-name",
            "user_name",
            "candidate_name",
            "person_name",
        ],
    ),
    (
        "email",
        &[
            "email",
            "email_address",
            "e_mail",
            "emailaddress",
            "mail",
            "e-mail",
            "contact_email",
            "user_email",
            "applicant_email",
            "personal_email",
            "work_email",
            "email_id",
        ],
    ),
    (
        "phone",
        &[
            "phone",
            "phone_number",
            "phonenumber",
            "telephone",
            "tel",
            "mobile",
            "cell",
            "contact_number",
            "phone_no",
            "tel_no",
            "mobile_number",
            "cellphone",
            "contact_phone",
        ],
    ),
    // Address
    (
        "street",
        &[
            "street",
            "address",
            "street_address",
            "address_line_1",
            "address1",
            "addr1",
            "street_1",
            "home_address",
            "residential_address",
        ],
    ),
    (
        "street2",
        &[
            "street_2",
            "address_line_2",
            "address2",
            "addr2",
            "apartment",
            "apt",
            "suite",
            "unit",
            "line2",
            "address_2",
        ],
    ),
    (
        "city",
        &[
            "city",
            "town",
            "locality",
            "municipality",
            "address_city",
            "city_name",
            "home_city",
            "residence_city",
        ],
    ),
    (
        "state",
        &[
            "state",
            "province",
            "region",
            "state_province",
            "address_state",
            "state_name",
            "prov",
            "st",
        ],
    ),
    (
        "zipCode",
        &[
            "zip",
            "zip_code",
            "zipcode",
            "postal_code",
            "postalcode",
            "postcode",
            "zip_postal",
            "address_zip",
        ],
    ),
    (
        "country",
        &[
            "country",
            "nation",
            "country_name",
            "address_country",
            "home_country",
            "nationality_country",
        ],
    ),
    // Online presence
    (
        "linkedin",
        &[
            "linkedin",
            "linkedin_url",
            "linkedin_profile",
            "linkedin_link",
            "social_linkedin",
            "li_url",
            "linkedin_username",
        ],
    ),
    (
        "website",
        &[
            "website",
            "personal_website",
            "homepage",
            "web_site",
            "portfolio_url",
            "personal_url",
            "website_url",
        ],
    ),
    (
        "github",
        &[
            "github",
            "github_url",
            "github_profile",
            "github_username",
            "git_hub",
            "github_link",
            "code_repository",
        ],
    ),
    // Work experience
    (
        "currentCompany",
        &[
            "current_company",
            "employer",
            "company",
            "current_employer",
            "organization",
            "workplace",
            "company_name",
            "current_job_company",
        ],
    ),
    (
        "currentTitle",
        &[
            "current_title",
            "job_title",
            "position",
            "current_position",
            "title",
            "role",
            "current_role",
            "job_position",
            "occupation",
        ],
    ),
    (
        "yearsExperience",
        &[
            "years_experience",
            "experience_years",
            "total_experience",
            "work_experience",
            "professional_experience",
            "exp_years",
        ],
    ),
    (
        "salary",
        &[
            "salary",
            "current_salary",
            "expected_salary",
            "salary_expectation",
            "compensation",
            "wage",
            "pay",
            "salary_range",
            "annual_salary",
        ],
    ),
    // Education
    (
        "university",
        &[
            "university",
            "college",
            "school",
            "institution",
            "alma_mater",
            "education_institution",
            "university_name",
            "college_name",
        ],
    ),
    (
        "degree",
        &[
            "degree",
            "education_level",
            "qualification",
            "diploma",
            "certificate",
            "academic_degree",
            "highest_degree",
        ],
    ),
    (
        "major",
        &[
            "major",
            "field_of_study",
            "study_field",
            "specialization",
            "concentration",
            "subject",
            "area_of_study",
            "academic_major",
        ],
    ),
    (
        "gpa",
        &[
            "gpa",
            "grade_point_average",
            "grades",
            "academic_performance",
            "cgpa",
            "cumulative_gpa",
        ],
    ),
    (
        "graduationYear",
        &[
            "graduation_year",
            "grad_year",
            "year_graduated",
            "completion_year",
            "graduation_date",
            "degree_year",
        ],
    ),
    // Skills and certifications
    (
        "skills",
        &[
            "skills",
            "technical_skills",
            "competencies",
            "abilities",
            "skill_set",
            "expertise",
            "proficiencies",
            "talents",
        ],
    ),
    (
        "certifications",
        &[
            "certifications",
            "certificates",
            "credentials",
            "licenses",
            "professional_certifications",
            "qualifications",
        ],
    ),
    (
        "languages",
        &[
            "languages",
            "language_skills",
            "spoken_languages",
            "linguistics",
            "foreign_languages",
            "multilingual",
        ],
    ),
    // Additional
    (
        "summary",
        &[
            "summary",
            "profile_summary",
            "about",
            "bio",
            "biography",
            "professional_summary",
            "overview",
            "introduction",
            "description",
        ],
    ),
    (
        "objective",
        &[
            "objective",
            "career_objective",
            "goal",
            "career_goal",
            "professional_objective",
            "job_objective",
        ],
    ),
    (
        "coverLetter",
        &[
            "cover_letter",
            "covering_letter",
            "motivation_letter",
            "personal_statement",
            "introduction_letter",
            "application_letter",
        ],
    ),
    (
        "references",
        &[
            "references",
            "referees",
            "recommendations",
            "reference_contacts",
            "professional_references",
            "character_references",
        ],
    ),
    (
        "availability",
        &[
            "availability",
            "start_date",
            "available_from",
            "notice_period",
            "when_available",
            "earliest_start",
            "join_date",
        ],
    ),
    (
        "workAuthorization",
        &[
            "work_authorization",
            "visa_status",
            "eligibility",
            "authorized_to_work",
            "work_permit",
            "employment_eligibility",
            "legal_status",
        ],
    ),
    (
        "willingToRelocate",
        &[
            "willing_to_relocate",
            "relocate",
            "relocation",
            "move",
            "open_to_relocation",
            "relocation_preference",
        ],
    ),
    (
        "travelWillingness",
        &[
            "travel",
            "willing_to_travel",
            "travel_percentage",
            "business_travel",
            "travel_requirements",
            "mobility",
        ],
    ),
];
