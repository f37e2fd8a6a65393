//! Merchant Category Code (MCC) lookup table
//!
//! Standard ISO 18245 four-digit codes mapped to display names. The table is
//! a compiled-in constant, sorted by code so lookups can binary search.
//! Codes missing from the table label as [`UNKNOWN_CATEGORY`]; unrecognized
//! codes are common in the wild and are never an error.

/// Label used for codes with no table entry
pub const UNKNOWN_CATEGORY: &str = "Unknown Category";

/// Sorted (code, name) pairs. Leading zeros are significant: codes are
/// compared as 4-character strings, never as integers.
static MCC_CATEGORIES: &[(&str, &str)] = &[
    ("0742", "Veterinary Services"),
    ("0763", "Agricultural Cooperatives"),
    ("0780", "Landscaping and Horticultural Services"),
    ("1520", "General Contractors"),
    ("1711", "Heating, Plumbing and Air Conditioning Contractors"),
    ("1731", "Electrical Contractors"),
    ("1799", "Special Trade Contractors"),
    ("2741", "Miscellaneous Publishing and Printing"),
    ("4011", "Railroads"),
    ("4111", "Local and Suburban Commuter Passenger Transport"),
    ("4112", "Passenger Railways"),
    ("4121", "Taxicabs and Limousines"),
    ("4131", "Bus Lines"),
    ("4214", "Motor Freight Carriers and Trucking"),
    ("4215", "Courier Services"),
    ("4225", "Public Warehousing and Storage"),
    ("4411", "Steamship and Cruise Lines"),
    ("4457", "Boat Rentals and Leasing"),
    ("4468", "Marinas, Marine Service and Supplies"),
    ("4511", "Airlines and Air Carriers"),
    ("4582", "Airports, Flying Fields and Airport Terminals"),
    ("4722", "Travel Agencies and Tour Operators"),
    ("4784", "Tolls and Bridge Fees"),
    ("4789", "Transportation Services (Not Elsewhere Classified)"),
    ("4812", "Telecommunication Equipment and Telephone Sales"),
    ("4813", "Key-Entry Telecom Services"),
    ("4814", "Telecommunication Services"),
    ("4816", "Computer Network and Information Services"),
    ("4821", "Telegraph Services"),
    ("4829", "Wire Transfers and Money Orders"),
    ("4899", "Cable, Satellite and Other Pay Television Services"),
    ("4900", "Utilities (Electric, Gas, Water, Sanitary)"),
    ("5013", "Motor Vehicle Supplies and New Parts"),
    ("5039", "Construction Materials (Not Elsewhere Classified)"),
    ("5045", "Computers, Peripherals and Software"),
    ("5094", "Precious Stones and Metals, Watches and Jewelry"),
    ("5122", "Drugs, Drug Proprietaries and Druggist Sundries"),
    ("5172", "Petroleum and Petroleum Products"),
    ("5192", "Books, Periodicals and Newspapers"),
    ("5193", "Florists Supplies, Nursery Stock and Flowers"),
    ("5200", "Home Supply Warehouse Stores"),
    ("5211", "Lumber and Building Materials Stores"),
    ("5251", "Hardware Stores"),
    ("5261", "Nurseries and Lawn and Garden Supply Stores"),
    ("5300", "Wholesale Clubs"),
    ("5309", "Duty Free Stores"),
    ("5310", "Discount Stores"),
    ("5311", "Department Stores"),
    ("5331", "Variety Stores"),
    ("5399", "Miscellaneous General Merchandise"),
    ("5411", "Grocery Stores and Supermarkets"),
    ("5422", "Freezer and Locker Meat Provisioners"),
    ("5441", "Candy, Nut and Confectionery Stores"),
    ("5451", "Dairy Products Stores"),
    ("5462", "Bakeries"),
    ("5499", "Miscellaneous Food Stores"),
    ("5511", "Car and Truck Dealers (New and Used)"),
    ("5521", "Car and Truck Dealers (Used Only)"),
    ("5531", "Auto and Home Supply Stores"),
    ("5532", "Automotive Tire Stores"),
    ("5533", "Automotive Parts and Accessories Stores"),
    ("5541", "Service Stations"),
    ("5542", "Automated Fuel Dispensers"),
    ("5599", "Miscellaneous Automotive Dealers"),
    ("5611", "Men's and Boys' Clothing and Accessories Stores"),
    ("5621", "Women's Ready-To-Wear Stores"),
    ("5631", "Women's Accessory and Specialty Shops"),
    ("5641", "Children's and Infants' Wear Stores"),
    ("5651", "Family Clothing Stores"),
    ("5655", "Sports and Riding Apparel Stores"),
    ("5661", "Shoe Stores"),
    ("5691", "Men's and Women's Clothing Stores"),
    ("5699", "Miscellaneous Apparel and Accessory Shops"),
    ("5712", "Furniture and Home Furnishings Stores"),
    ("5722", "Household Appliance Stores"),
    ("5732", "Electronics Stores"),
    ("5733", "Music Stores"),
    ("5734", "Computer Software Stores"),
    ("5735", "Record Stores"),
    ("5811", "Caterers"),
    ("5812", "Eating Places and Restaurants"),
    ("5813", "Drinking Places (Bars, Taverns, Nightclubs)"),
    ("5814", "Fast Food Restaurants"),
    ("5912", "Drug Stores and Pharmacies"),
    ("5921", "Package Stores (Beer, Wine, Liquor)"),
    ("5941", "Sporting Goods Stores"),
    ("5942", "Book Stores"),
    ("5943", "Stationery and Office Supply Stores"),
    ("5944", "Jewelry, Watch, Clock and Silverware Stores"),
    ("5945", "Hobby, Toy and Game Shops"),
    ("5947", "Gift, Card, Novelty and Souvenir Shops"),
    ("5960", "Direct Marketing - Insurance Services"),
    ("5962", "Direct Marketing - Travel-Related Services"),
    ("5964", "Direct Marketing - Catalog Merchants"),
    ("5965", "Direct Marketing - Combination Catalog and Retail"),
    ("5967", "Direct Marketing - Inbound Teleservices"),
    ("5968", "Direct Marketing - Continuity/Subscription Merchants"),
    ("5969", "Direct Marketing - Other Direct Marketers"),
    ("5977", "Cosmetic Stores"),
    ("5983", "Fuel Dealers (Non-Automotive)"),
    ("5992", "Florists"),
    ("5993", "Cigar Stores and Stands"),
    ("5994", "News Dealers and Newsstands"),
    ("5995", "Pet Shops, Pet Foods and Supplies"),
    ("5999", "Miscellaneous Specialty Retail"),
    ("6011", "Financial Institutions - Automated Cash Disbursements"),
    ("6012", "Financial Institutions - Merchandise and Services"),
    ("6051", "Non-Financial Institutions - Foreign Currency, Money Orders"),
    ("6300", "Insurance Sales, Underwriting and Premiums"),
    ("6381", "Insurance Premiums"),
    ("6399", "Insurance (Not Elsewhere Classified)"),
    ("6513", "Real Estate Agents and Managers - Rentals"),
    ("6529", "Remote Stored Value Load - Financial Institution"),
    ("6540", "Stored Value Card Purchase/Load"),
    ("7011", "Lodging - Hotels, Motels and Resorts"),
    ("7230", "Beauty and Barber Shops"),
    ("7298", "Health and Beauty Spas"),
    ("7311", "Advertising Services"),
    ("7372", "Computer Programming and Data Processing"),
    ("7399", "Business Services (Not Elsewhere Classified)"),
    ("7512", "Automobile Rental Agencies"),
    ("7523", "Parking Lots and Garages"),
    ("7531", "Automotive Body Repair Shops"),
    ("7535", "Automotive Paint Shops"),
    ("7538", "Automotive Service Shops"),
    ("7542", "Car Washes"),
    ("7631", "Watch, Clock and Jewelry Repair"),
    ("7832", "Motion Picture Theaters"),
    ("7841", "Video Tape Rental Stores"),
    ("7922", "Theatrical Producers and Ticket Agencies"),
    ("7941", "Commercial Sports and Athletic Fields"),
    ("7991", "Tourist Attractions and Exhibits"),
    ("7994", "Video Game Arcades"),
    ("7995", "Betting (Including Lottery Tickets)"),
    ("7996", "Amusement Parks and Carnivals"),
    ("7997", "Membership Clubs (Sports, Recreation, Athletic)"),
    ("7999", "Recreation Services (Not Elsewhere Classified)"),
    ("8011", "Doctors and Physicians"),
    ("8021", "Dentists and Orthodontists"),
    ("8041", "Chiropractors"),
    ("8042", "Optometrists and Ophthalmologists"),
    ("8062", "Hospitals"),
    ("8071", "Medical and Dental Laboratories"),
    ("8099", "Medical Services and Health Practitioners"),
    ("8111", "Legal Services and Attorneys"),
    ("8211", "Elementary and Secondary Schools"),
    ("8220", "Colleges, Universities and Professional Schools"),
    ("8241", "Correspondence Schools"),
    ("8244", "Business and Secretarial Schools"),
    ("8249", "Trade and Vocational Schools"),
    ("8299", "Schools and Educational Services (Not Elsewhere Classified)"),
    ("8351", "Child Care Services"),
    ("8398", "Charitable and Social Service Organizations"),
    ("8661", "Religious Organizations"),
    ("8675", "Automobile Associations"),
    ("8699", "Membership Organizations (Not Elsewhere Classified)"),
    ("8931", "Accounting, Auditing and Bookkeeping Services"),
    ("8999", "Professional Services (Not Elsewhere Classified)"),
    ("9211", "Court Costs (Including Alimony and Child Support)"),
    ("9222", "Fines"),
    ("9223", "Bail and Bond Payments"),
    ("9311", "Tax Payments"),
    ("9399", "Government Services (Not Elsewhere Classified)"),
    ("9402", "Postal Services (Government Only)"),
    ("9405", "Intra-Government Purchases"),
    ("9950", "Intra-Company Purchases"),
];

/// Look up the display name for a category code. Exact match only.
pub fn category_name(code: &str) -> Option<&'static str> {
    MCC_CATEGORIES
        .binary_search_by_key(&code, |&(c, _)| c)
        .ok()
        .map(|i| MCC_CATEGORIES[i].1)
}

/// Like [`category_name`] but falls back to [`UNKNOWN_CATEGORY`]
pub fn category_label(code: &str) -> &'static str {
    category_name(code).unwrap_or(UNKNOWN_CATEGORY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_sorted_and_unique() {
        // Binary search depends on this
        for pair in MCC_CATEGORIES.windows(2) {
            assert!(
                pair[0].0 < pair[1].0,
                "table out of order at {} / {}",
                pair[0].0,
                pair[1].0
            );
        }
    }

    #[test]
    fn test_all_codes_are_four_digits() {
        for (code, _) in MCC_CATEGORIES {
            assert_eq!(code.len(), 4, "bad code length: {}", code);
            assert!(
                code.chars().all(|c| c.is_ascii_digit()),
                "non-digit code: {}",
                code
            );
        }
    }

    #[test]
    fn test_known_codes() {
        assert_eq!(category_name("5812"), Some("Eating Places and Restaurants"));
        assert_eq!(category_name("5411"), Some("Grocery Stores and Supermarkets"));
        // Leading zero is significant
        assert_eq!(category_name("0763"), Some("Agricultural Cooperatives"));
        assert_eq!(category_name("763"), None);
    }

    #[test]
    fn test_unknown_code_falls_back() {
        assert_eq!(category_name("0000"), None);
        assert_eq!(category_label("0000"), UNKNOWN_CATEGORY);
        assert_eq!(category_label("5812"), "Eating Places and Restaurants");
    }
}
