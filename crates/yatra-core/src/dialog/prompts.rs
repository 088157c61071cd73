//! Canonical prompt and error texts.
//!
//! Every state has exactly one error text and one forward prompt, so tests
//! can assert replies verbatim. Texts that interpolate session data live in
//! [`super::format`].

// Global
pub const GREETING: &str = "Hello! I'm here to assist you with bookings.\n\n\
Please choose an option:\n\
1. Book a train\n\
2. Book a flight\n\
3. PNR status\n\
4. Live train status";
pub const MENU_INVALID: &str = "Invalid choice. Please reply with a number between 1 and 4.";
pub const RESTARTED: &str =
    "Your session has been restarted. Send any message to begin a new booking.";
pub const SESSION_RESET: &str =
    "Something went wrong with your session, so it has been reset. Send any message to begin again.";

// Rail flow
pub const RAIL_SOURCE_PROMPT: &str = "You've selected train booking.\n\n\
Please enter your source station (e.g. New Delhi or NDLS):";
pub const STATION_NOT_FOUND: &str = "Sorry, I couldn't find that station. Please try again.";
pub const RAIL_DEST_PROMPT: &str =
    "Got it! Now, please enter your destination station (e.g. Vadodara or BRC).";
pub const RAIL_DATE_PROMPT: &str = "Got it! What is your travel date? (format: DD-MM-YYYY)";
pub const INVALID_DATE: &str =
    "Invalid date format. Please enter the date in the format DD-MM-YYYY.";
pub const CONFIRM_PROMPT: &str = "Please reply 'confirm' to proceed or 'restart' to start over.";
pub const RAIL_NO_TRAINS: &str = "No trains found for the given route and date. \
Please provide the train details manually.\n\n\
Reply with the train name and number like this: 'Train Name, Train Number'.";
pub const RAIL_MANUAL_PROMPT: &str =
    "Please provide the train name and number like this: 'Train Name, Train Number'.";
pub const RAIL_MANUAL_INVALID: &str = "Invalid format. \
Please enter the train name and number like this: 'Train Name, Train Number'.";
pub const RAIL_SELECT_HINT: &str = "Reply with the train number (e.g. '1') to select a train, \
'more' to see more options, or 'other' to enter a train manually.";
pub const RAIL_SELECT_INVALID: &str = "Please reply with a valid train number (e.g. '1').";
pub const RAIL_LIST_END: &str =
    "End of train list. Select a train number or type 'other' to enter manually.";
pub const RAIL_CLASS_MENU: &str =
    "Which class would you like to book?\n1. General\n2. Sleeper\n3. 3AC\n4. 2AC\n5. 1AC";
pub const RAIL_CLASS_INVALID: &str =
    "Invalid class selection. Please choose from:\n1. General\n2. Sleeper\n3. 3AC\n4. 2AC\n5. 1AC";
pub const RAIL_TRAVELERS_PROMPT: &str = "Now, please provide traveler details for each traveler.\n\n\
Reply with 'Name, Age, Gender', one traveler per line.";
pub const RAIL_TRAVELER_INVALID: &str =
    "Invalid traveler detail format. Please use 'Name, Age, Gender', one traveler per line.";
pub const PHONE_PROMPT: &str =
    "Thank you! Now, please provide your phone number (with country code).";
pub const INVALID_PHONE: &str = "Invalid phone number. \
Please provide a valid phone number with country code (e.g. +911234567890).";
pub const PERSIST_FAILED: &str =
    "An error occurred while saving your booking. Please try again.";

// Air flow
pub const AIR_DEPART_PROMPT: &str = "You've selected flight booking.\n\n\
Please enter your departure airport (e.g. New Delhi or DEL):";
pub const AIRPORT_NOT_FOUND: &str =
    "Sorry, I couldn't find an airport matching that. Please provide a valid city name or code.";
pub const AIR_DEST_PROMPT: &str = "Great! Now, enter your destination airport (e.g. Mumbai or BOM):";
pub const AIR_DATE_PROMPT: &str = "Enter your travel date (format: DD-MM-YYYY):";
pub const AIR_CLASS_MENU: &str =
    "Which class would you like to book?\n1. Economy\n2. Premium Economy\n3. Business\n4. First";
pub const AIR_CLASS_INVALID: &str = "Invalid class selection. \
Please choose from:\n1. Economy\n2. Premium Economy\n3. Business\n4. First";
pub const AIR_COUNTS_PROMPT: &str =
    "Enter the number of passengers (format: adults,children,infants).\n\n\
Each adult can accompany at most one infant.\n\nExample: 2,1,1";
pub const COUNTS_FORMAT_INVALID: &str =
    "Invalid format. Please enter numbers separated by commas (e.g. 2,1,1).";
pub const COUNTS_CONSTRAINT: &str = "Please enter valid passenger numbers. \
The number of infants must be less than or equal to the number of adults.";
pub const COUNTS_TOO_MANY: &str =
    "Please enter valid passenger numbers. A booking can include at most 9 passengers.";
pub const AIR_EMAIL_PROMPT: &str =
    "Please provide your email address to complete the booking:";
pub const INVALID_EMAIL: &str = "Invalid email format. Please provide a valid email address.";
pub const AIR_NO_FLIGHTS: &str = "No flights found for the given route and date. \
Please provide your email address to search again, or type 'restart' to start over.";
pub const AIR_SELECT_HINT: &str =
    "Please select a flight option by entering the number (e.g. '1'), or type 'more' to see more options.";
pub const AIR_SELECT_INVALID: &str = "Please enter a valid flight number.";
pub const AIR_SELECT_OUT_OF_RANGE: &str = "Invalid selection. Please choose a valid flight number.";
pub const AIR_LIST_END: &str = "End of flight list. Please select a flight number to proceed.";
pub const PASSENGER_FORMAT: &str =
    "Format: Given names, Last name, Gender (M/F), Date of birth (DD-MM-YYYY), Nationality";
pub const PASSENGER_INVALID: &str = "Invalid format. Please use:\n\
Given names, Last name, Gender (M/F), Date of birth (DD-MM-YYYY), Nationality";
pub const CONTACT_PHONE_PROMPT: &str =
    "Please enter contact details:\nPhone number (with country code)";

// Utility flows
pub const PNR_PROMPT: &str = "Please enter your PNR number:";
pub const PNR_FAILED: &str =
    "Sorry, couldn't fetch PNR details at the moment. Please try again later.";
pub const LIVE_PROMPT: &str = "Please enter the train number and start day (1-5):\n\
1 = today\n2 = yesterday\n3 = 2 days ago\n4 = 3 days ago\n5 = 4 days ago\n\
Example: 12345 1";
pub const LIVE_FORMAT_INVALID: &str =
    "Invalid format. Please provide both train number and day, e.g. '12345 1'.";
pub const LIVE_DAY_INVALID: &str =
    "Invalid day selection. Please choose a number between 1 and 5.";
pub const LIVE_FAILED: &str =
    "Unable to fetch train status. Please verify the train number and try again.";
