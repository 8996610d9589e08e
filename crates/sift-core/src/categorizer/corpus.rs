//! Bundled seed training corpus for the expense categorizer
//!
//! Every taxonomy category has the same number of examples so the stratified
//! train/eval split keeps coverage of the full label set. Descriptions are
//! short free-text strings of the kind banks put on statements.

use crate::models::Category;

/// Seed (description, category) pairs used for cold-start training
pub const SEED_CORPUS: &[(&str, Category)] = &[
    // Food
    ("Starbucks coffee", Category::Food),
    ("McDonalds burger and fries", Category::Food),
    ("Grocery store weekly shopping", Category::Food),
    ("Pizza delivery dinner", Category::Food),
    ("Sushi restaurant lunch", Category::Food),
    ("Starbucks latte and muffin", Category::Food),
    ("Whole Foods groceries", Category::Food),
    ("Burger King drive thru", Category::Food),
    ("Local bakery bread and pastries", Category::Food),
    ("Thai takeout dinner", Category::Food),
    ("Morning coffee at Starbucks", Category::Food),
    ("Supermarket fruits and vegetables", Category::Food),
    ("Chipotle burrito bowl", Category::Food),
    ("Restaurant dinner with friends", Category::Food),
    ("Food truck tacos", Category::Food),
    // Transport
    ("Uber ride to airport", Category::Transport),
    ("Shell gas station fill up", Category::Transport),
    ("Monthly metro pass", Category::Transport),
    ("Lyft ride downtown", Category::Transport),
    ("Parking garage fee", Category::Transport),
    ("City bus ticket", Category::Transport),
    ("Train ticket to city", Category::Transport),
    ("Taxi fare home", Category::Transport),
    ("Gas station fuel", Category::Transport),
    ("Car oil change service", Category::Transport),
    ("Uber ride home late night", Category::Transport),
    ("Subway fare card reload", Category::Transport),
    ("Toll road charge", Category::Transport),
    ("Bicycle repair shop", Category::Transport),
    ("Airport shuttle service", Category::Transport),
    // Entertainment
    ("Netflix monthly subscription", Category::Entertainment),
    ("Movie theater tickets", Category::Entertainment),
    ("Spotify premium subscription", Category::Entertainment),
    ("Concert tickets rock band", Category::Entertainment),
    ("Video game purchase steam", Category::Entertainment),
    ("Bowling night with friends", Category::Entertainment),
    ("Cinema popcorn and tickets", Category::Entertainment),
    ("Hulu streaming subscription", Category::Entertainment),
    ("Theme park admission", Category::Entertainment),
    ("Arcade games tokens", Category::Entertainment),
    ("Live music show tickets", Category::Entertainment),
    ("Disney plus subscription", Category::Entertainment),
    ("Comedy club cover charge", Category::Entertainment),
    ("Museum exhibition entry", Category::Entertainment),
    ("Karaoke bar night", Category::Entertainment),
    // Shopping
    ("Amazon online order", Category::Shopping),
    ("Zara new clothes", Category::Shopping),
    ("Best Buy electronics", Category::Shopping),
    ("H&M shirt and jeans", Category::Shopping),
    ("Shoe store sneakers", Category::Shopping),
    ("Amazon purchase books", Category::Shopping),
    ("IKEA furniture shelf", Category::Shopping),
    ("Target household items", Category::Shopping),
    ("Nike running shoes", Category::Shopping),
    ("Mall clothing haul", Category::Shopping),
    ("Walmart home supplies", Category::Shopping),
    ("Online order headphones", Category::Shopping),
    ("Department store jacket", Category::Shopping),
    ("Jewelry store gift", Category::Shopping),
    ("Etsy handmade decor", Category::Shopping),
    // Bills
    ("Electricity bill payment", Category::Bills),
    ("Water utility bill", Category::Bills),
    ("Internet service monthly bill", Category::Bills),
    ("Phone bill payment", Category::Bills),
    ("Rent payment apartment", Category::Bills),
    ("Gas utility bill", Category::Bills),
    ("Electric company monthly payment", Category::Bills),
    ("Mobile phone plan bill", Category::Bills),
    ("Cable and internet bill", Category::Bills),
    ("Home insurance premium", Category::Bills),
    ("Monthly rent transfer", Category::Bills),
    ("Heating bill winter", Category::Bills),
    ("Trash collection service bill", Category::Bills),
    ("Car insurance monthly premium", Category::Bills),
    ("Mortgage payment bank", Category::Bills),
    // Healthcare
    ("Pharmacy prescription refill", Category::Healthcare),
    ("Doctor visit copay", Category::Healthcare),
    ("Dental cleaning appointment", Category::Healthcare),
    ("Eye exam optometrist", Category::Healthcare),
    ("Urgent care visit", Category::Healthcare),
    ("CVS pharmacy medicine", Category::Healthcare),
    ("Physical therapy session", Category::Healthcare),
    ("Hospital lab tests", Category::Healthcare),
    ("Dermatologist consultation", Category::Healthcare),
    ("Vitamins and supplements pharmacy", Category::Healthcare),
    ("Annual checkup clinic", Category::Healthcare),
    ("Walgreens cold medicine", Category::Healthcare),
    ("Orthopedic specialist visit", Category::Healthcare),
    ("Blood test laboratory", Category::Healthcare),
    ("Flu shot pharmacy", Category::Healthcare),
    // Education
    ("University tuition payment", Category::Education),
    ("Textbooks for semester", Category::Education),
    ("Online course Udemy", Category::Education),
    ("Coursera subscription learning", Category::Education),
    ("School supplies notebooks", Category::Education),
    ("College tuition installment", Category::Education),
    ("Language class spanish lessons", Category::Education),
    ("Programming bootcamp fee", Category::Education),
    ("Exam registration fee", Category::Education),
    ("Student workbook purchase", Category::Education),
    ("Piano lessons monthly fee", Category::Education),
    ("Online certification course", Category::Education),
    ("Tutoring session math", Category::Education),
    ("Conference workshop registration", Category::Education),
    ("Library late fee", Category::Education),
    // Personal Care
    ("Haircut barber shop", Category::PersonalCare),
    ("Salon manicure and pedicure", Category::PersonalCare),
    ("Gym membership monthly", Category::PersonalCare),
    ("Spa massage treatment", Category::PersonalCare),
    ("Skincare products order", Category::PersonalCare),
    ("Hair salon coloring", Category::PersonalCare),
    ("Barber shop beard trim", Category::PersonalCare),
    ("Yoga studio class pass", Category::PersonalCare),
    ("Cosmetics store makeup", Category::PersonalCare),
    ("Facial treatment spa", Category::PersonalCare),
    ("Fitness club membership fee", Category::PersonalCare),
    ("Shampoo and toiletries", Category::PersonalCare),
    ("Nail salon appointment", Category::PersonalCare),
    ("Personal trainer session", Category::PersonalCare),
    ("Waxing salon visit", Category::PersonalCare),
    // Other
    ("Miscellaneous store purchase", Category::Other),
    ("ATM cash withdrawal", Category::Other),
    ("Bank service charge", Category::Other),
    ("Donation to charity", Category::Other),
    ("Post office stamps", Category::Other),
    ("Wire transfer fee", Category::Other),
    ("Currency exchange fee", Category::Other),
    ("Lottery ticket purchase", Category::Other),
    ("Pet food and supplies", Category::Other),
    ("Printing and copies", Category::Other),
    ("Storage unit rental", Category::Other),
    ("Notary public service", Category::Other),
    ("Shipping package fedex", Category::Other),
    ("Household repair handyman", Category::Other),
    ("Gift wrapping service", Category::Other),
    // Income
    ("Monthly salary deposit", Category::Income),
    ("Paycheck direct deposit", Category::Income),
    ("Freelance project payment", Category::Income),
    ("Client invoice payment received", Category::Income),
    ("Tax refund deposit", Category::Income),
    ("Salary payment employer", Category::Income),
    ("Consulting fee received", Category::Income),
    ("Dividend payment stocks", Category::Income),
    ("Interest payment savings", Category::Income),
    ("Bonus payment quarterly", Category::Income),
    ("Rental income deposit", Category::Income),
    ("Side gig payment", Category::Income),
    ("Commission payment sales", Category::Income),
    ("Royalty payment received", Category::Income),
    ("Cash gift birthday", Category::Income),
];

/// The seed corpus as owned pairs, the shape `ExpenseCategorizer::train` takes
pub fn seed_examples() -> Vec<(String, Category)> {
    SEED_CORPUS
        .iter()
        .map(|(desc, cat)| (desc.to_string(), *cat))
        .collect()
}
